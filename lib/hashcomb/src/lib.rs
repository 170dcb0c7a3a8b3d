pub use crate::algo::*;
pub use crate::combine::*;
pub use crate::search::*;

mod algo;
mod combine;
mod search;
