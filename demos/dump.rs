//! Builds a small integer buffer and prints its debug dump.
//!
//! Run with:
//!     cargo run --example dump

use bytevec::{ByteVec, ElementType, VecError};

fn main() -> Result<(), VecError> {
    let mut handle = Some(ByteVec::with_type(0, ElementType::I32)?);

    if let Some(v) = handle.as_mut() {
        for value in [3, -14, 159, 2653] {
            v.push_i32(value)?;
        }
        v.reserve_grow(4)?;
    }
    print!("{}", ByteVec::dump_handle(handle.as_ref()));

    ByteVec::release(&mut handle);
    print!("{}", ByteVec::dump_handle(handle.as_ref()));

    Ok(())
}
