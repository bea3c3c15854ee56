//! Closed set of element kinds accepted by [`ByteVec::with_type`](crate::ByteVec::with_type).

use std::fmt;

/// A primitive element kind with a fixed byte width.
///
/// # Example
///
/// ```
/// use bytevec::ElementType;
///
/// assert_eq!(ElementType::I32.size(), 4);
/// assert_eq!(ElementType::F32.to_string(), "f32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit IEEE 754 float.
    F32,
    /// 32-bit signed integer.
    I32,
}

impl ElementType {
    /// Returns the byte width of one element of this kind.
    pub const fn size(self) -> usize {
        match self {
            ElementType::F32 => size_of::<f32>(),
            ElementType::I32 => size_of::<i32>(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::F32 => write!(f, "f32"),
            ElementType::I32 => write!(f, "i32"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(ElementType::F32.size(), 4);
        assert_eq!(ElementType::I32.size(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(ElementType::I32.to_string(), "i32");
    }
}
