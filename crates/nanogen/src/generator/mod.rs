mod counter;
mod interface;
mod nano;

pub use counter::*;
pub use interface::*;
pub use nano::*;
