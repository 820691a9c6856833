//! Order items and the accumulating order record.

pub mod accumulator;
pub mod error;
pub mod item;

pub use accumulator::*;
pub use error::*;
pub use item::*;
