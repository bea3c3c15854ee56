//! The growable buffer.
//!
//! - [`ByteVec`] - Buffer of fixed-size raw elements
//! - [`Dump`] - Human-readable rendering of a buffer, for diagnostics

mod byte_vec;
mod dump;

pub use byte_vec::ByteVec;
pub use dump::Dump;
