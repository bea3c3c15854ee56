//! bytevec
//!
//! A minimal growable buffer of fixed-size raw elements.
//!
//! The element width is chosen when the buffer is created, either directly
//! in bytes or through an [`ElementType`]. From then on the buffer stores,
//! grows and indexes slots of that width without knowing what they hold.
//! Typed helpers (`push_i32`, `as_f32`, ...) are thin reinterpretations of
//! the slot bytes.
//!
//! The crate intentionally:
//! - does NOT remove or shrink elements
//! - does NOT synchronize access between threads
//! - does NOT bounds-check the primary accessors against the populated length
//!
//! By default a full buffer grows by exactly one element per append. Pick
//! [`GrowthPolicy::Doubling`] through a [`VecConfig`] when append throughput
//! matters more than a tight allocation.
//!
//! # Example
//!
//! ```
//! use bytevec::{ByteVec, ElementType, VecError};
//!
//! fn main() -> Result<(), VecError> {
//!     let mut v = ByteVec::with_type(0, ElementType::I32)?;
//!     v.push_i32(100)?;
//!     v.push_i32(-5)?;
//!
//!     assert_eq!(v.as_i32(0), 100);
//!     assert_eq!(v.as_i32(1), -5);
//!     assert!(v.capacity() >= 2);
//!
//!     print!("{}", v.dump());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod element;
mod error;
mod vector;

//
// Public surface
//

pub use config::{GrowthPolicy, VecConfig};
pub use element::ElementType;
pub use error::VecError;
pub use vector::{ByteVec, Dump};
