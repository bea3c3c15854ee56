//! Diagnostic rendering of a buffer.

use std::fmt;

use super::ByteVec;

/// Renders a buffer's metadata and each populated slot.
///
/// Slots of at least four bytes are shown as their `i32` reading, narrower
/// slots as hex bytes. Obtained from [`ByteVec::dump`] or
/// [`ByteVec::dump_handle`].
///
/// # Example
///
/// ```
/// use bytevec::{ByteVec, ElementType};
///
/// let mut v = ByteVec::with_type(5, ElementType::I32)?;
/// v.push_i32(-5)?;
///
/// let text = v.dump().to_string();
/// assert!(text.contains("capacity     =     5"));
/// assert!(text.contains("[0]            -5"));
/// # Ok::<(), bytevec::VecError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    vec: Option<&'a ByteVec>,
}

impl<'a> Dump<'a> {
    pub(super) fn new(vec: Option<&'a ByteVec>) -> Self {
        Self { vec }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(v) = self.vec else {
            return writeln!(f, "ByteVec is None");
        };

        writeln!(f, "ByteVec")?;
        writeln!(f, " size         = {:5}", v.len())?;
        writeln!(f, " capacity     = {:5}", v.capacity())?;
        writeln!(f, " element_size = {:5}", v.element_size())?;
        let state = if v.has_allocation() {
            "allocated"
        } else {
            "unallocated"
        };
        writeln!(f, " data ({}) =", state)?;
        writeln!(f, " {{")?;
        for i in 0..v.len() {
            let slot = v.at(i);
            if slot.len() >= 4 {
                writeln!(f, "   [{}]   {:11}", i, v.as_i32(i))?;
            } else {
                write!(f, "   [{}]   ", i)?;
                for byte in slot {
                    write!(f, "{:02x}", byte)?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f, " }}")
    }
}
