#![doc = include_str!("../README.md")]

mod aggregate;
mod ephemeral;
mod error;
mod multiplier;
mod pool;
mod segment;


pub use crate::aggregate::*;
pub use crate::ephemeral::*;
pub use crate::error::*;
pub use crate::multiplier::*;
pub use crate::pool::*;
pub use crate::segment::*;
