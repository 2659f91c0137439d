mod colors;
pub use colors::*;

mod element_id;
pub use element_id::*;

mod geometry;
pub use geometry::*;

mod transitions;
pub use transitions::*;
