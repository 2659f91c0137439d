mod page;
pub use page::*;

mod scroll;
pub use scroll::*;
