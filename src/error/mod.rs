//! Error types for bytevec.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur while creating or growing a [`ByteVec`](crate::ByteVec).
#[derive(Debug)]
pub enum VecError {
    /// The element size was zero.
    InvalidElementSize,

    /// The requested capacity does not fit in addressable memory.
    CapacityOverflow {
        /// The capacity, in elements, that was requested.
        capacity: usize,
        /// The element size in bytes.
        element_size: usize,
    },

    /// The allocator refused a block of the requested size.
    AllocationFailed {
        /// Size of the refused block in bytes.
        bytes: usize,
        /// The underlying reservation error.
        source: TryReserveError,
    },

    /// A value passed to `try_push` did not match the element size.
    ValueSizeMismatch {
        /// The buffer's element size.
        expected: usize,
        /// The length of the value that was passed.
        actual: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VecError::InvalidElementSize => write!(f, "element size must be non-zero"),
            VecError::CapacityOverflow {
                capacity,
                element_size,
            } => write!(
                f,
                "capacity overflow: {} elements of {} bytes",
                capacity, element_size
            ),
            VecError::AllocationFailed { bytes, source } => {
                write!(f, "allocation of {} bytes failed: {}", bytes, source)
            }
            VecError::ValueSizeMismatch { expected, actual } => write!(
                f,
                "value size mismatch: {} bytes (element size {})",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for VecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VecError::AllocationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
