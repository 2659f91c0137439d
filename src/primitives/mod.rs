mod card;
pub use card::*;

mod reveal;
pub use reveal::*;
