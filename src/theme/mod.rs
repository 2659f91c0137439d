//! Page theme: surface colors, typography, and layout dimensions.
//!
//! The accent palette lives in `folio_palette`; this module covers the
//! neutral chrome every section is drawn on.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
