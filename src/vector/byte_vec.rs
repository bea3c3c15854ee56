//! The `ByteVec` type - a growable buffer of fixed-size byte elements.

use std::ops::Range;

use bytes::Bytes;
use tracing::{debug, trace};

use super::Dump;
use crate::config::{GrowthPolicy, VecConfig, block_size};
use crate::element::ElementType;
use crate::error::VecError;

/// A growable buffer of untyped elements, each `element_size` bytes wide.
///
/// The buffer owns one contiguous block of `capacity * element_size` bytes.
/// A buffer with zero capacity holds no allocation at all. Fresh slots are
/// zero-filled, and growing the buffer copies the previous block into the
/// new one.
///
/// Indexed access does not check `index < len()`: any slot inside the
/// allocation can be read, and an index past the allocation panics.
/// Use [`ByteVec::get`] and friends for checked reads.
///
/// A `ByteVec` is not internally synchronized; callers sharing one across
/// threads must provide their own locking.
///
/// # Example
///
/// ```
/// use bytevec::{ByteVec, ElementType};
///
/// let mut v = ByteVec::with_type(5, ElementType::I32)?;
/// v.push_i32(5)?;
/// v.push_i32(-5)?;
///
/// assert_eq!(v.as_i32(0), 5);
/// assert_eq!(v.as_i32(1), -5);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.capacity(), 5);
/// # Ok::<(), bytevec::VecError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByteVec {
    /// Backing block, `None` while capacity is zero.
    data: Option<Box<[u8]>>,
    element_size: usize,
    len: usize,
    capacity: usize,
    growth: GrowthPolicy,
    reallocations: usize,
}

impl ByteVec {
    /// Creates a placeholder buffer with a zero element size and no storage.
    ///
    /// The placeholder only exists to be replaced. Appending to it or reading
    /// from it is a caller error: pushes of non-empty values panic and all
    /// slots are zero bytes wide.
    pub const fn empty() -> Self {
        Self {
            data: None,
            element_size: 0,
            len: 0,
            capacity: 0,
            growth: GrowthPolicy::Incremental,
            reallocations: 0,
        }
    }

    /// Creates a buffer with room for `capacity` elements of `element_size` bytes.
    ///
    /// A zero `capacity` allocates nothing; storage appears on the first push.
    ///
    /// # Errors
    ///
    /// - [`VecError::InvalidElementSize`] if `element_size` is zero
    /// - [`VecError::CapacityOverflow`] if the block would exceed `isize::MAX` bytes
    /// - [`VecError::AllocationFailed`] if the allocator refuses the block
    pub fn with_element_size(capacity: usize, element_size: usize) -> Result<Self, VecError> {
        Self::from_config(VecConfig::new(capacity, element_size)?)
    }

    /// Creates a buffer sized for `capacity` elements of the given kind.
    ///
    /// # Example
    ///
    /// ```
    /// use bytevec::{ByteVec, ElementType};
    ///
    /// let v = ByteVec::with_type(0, ElementType::F32)?;
    /// assert_eq!(v.element_size(), 4);
    /// assert!(!v.has_allocation());
    /// # Ok::<(), bytevec::VecError>(())
    /// ```
    pub fn with_type(capacity: usize, ty: ElementType) -> Result<Self, VecError> {
        Self::with_element_size(capacity, ty.size())
    }

    /// Creates a buffer from a [`VecConfig`].
    ///
    /// The configuration is validated again, so one built with the unchecked
    /// `with_*` setters is rejected here if it is invalid.
    pub fn from_config(config: VecConfig) -> Result<Self, VecError> {
        if let Err(err) = config.validate() {
            debug!(
                capacity = config.capacity(),
                element_size = config.element_size(),
                error = %err,
                "rejected buffer config"
            );
            return Err(err);
        }

        let capacity = config.capacity();
        let element_size = config.element_size();
        let data = if capacity == 0 {
            None
        } else {
            Some(zeroed_block(capacity * element_size, &[])?)
        };

        Ok(Self {
            data,
            element_size,
            len: 0,
            capacity,
            growth: config.growth_policy(),
            reallocations: 0,
        })
    }

    /// Returns the number of populated elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no elements are populated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current allocation holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element size in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns true if the buffer currently owns a block.
    pub fn has_allocation(&self) -> bool {
        self.data.is_some()
    }

    /// Returns the growth policy used by [`ByteVec::push`].
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Returns how many times the backing block has been reallocated.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Ensures room for at least `size` elements.
    ///
    /// Does nothing when the capacity already suffices. Otherwise the block
    /// is reallocated to exactly `size` elements.
    pub fn reserve(&mut self, size: usize) -> Result<(), VecError> {
        if self.capacity >= size {
            return Ok(());
        }
        self.reallocate(size)
    }

    /// Grows the capacity by `amount` elements.
    pub fn reserve_grow(&mut self, amount: usize) -> Result<(), VecError> {
        if amount == 0 {
            return Ok(());
        }
        let capacity = self
            .capacity
            .checked_add(amount)
            .ok_or(VecError::CapacityOverflow {
                capacity: self.capacity,
                element_size: self.element_size,
            })?;
        self.reallocate(capacity)
    }

    /// Appends one element given as its raw bytes.
    ///
    /// A full buffer grows according to its [`GrowthPolicy`] first.
    ///
    /// # Panics
    ///
    /// Panics if `value.len() != self.element_size()`. Use
    /// [`ByteVec::try_push`] to get an error instead.
    ///
    /// # Errors
    ///
    /// Returns an error if growing the buffer overflows or the allocator
    /// refuses; the buffer is left unchanged.
    pub fn push(&mut self, value: &[u8]) -> Result<(), VecError> {
        assert_eq!(
            value.len(),
            self.element_size,
            "pushed value does not match the element size"
        );

        if self.len >= self.capacity {
            let next = self
                .growth
                .next_capacity(self.capacity)
                .ok_or(VecError::CapacityOverflow {
                    capacity: self.capacity,
                    element_size: self.element_size,
                })?;
            self.reallocate(next)?;
        }

        let slot = self.slot_range(self.len);
        self.storage_mut()[slot].copy_from_slice(value);
        self.len += 1;
        Ok(())
    }

    /// Appends one element, rejecting values of the wrong size.
    pub fn try_push(&mut self, value: &[u8]) -> Result<(), VecError> {
        if value.len() != self.element_size {
            return Err(VecError::ValueSizeMismatch {
                expected: self.element_size,
                actual: value.len(),
            });
        }
        self.push(value)
    }

    /// Appends an `i32` in native byte order.
    pub fn push_i32(&mut self, value: i32) -> Result<(), VecError> {
        self.push(&value.to_ne_bytes())
    }

    /// Appends an `f32` in native byte order.
    pub fn push_f32(&mut self, value: f32) -> Result<(), VecError> {
        self.push(&value.to_ne_bytes())
    }

    /// Returns the bytes of the slot at `index`.
    ///
    /// The index is not checked against [`len`](ByteVec::len); unpopulated
    /// slots read as zero bytes.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the allocation.
    pub fn at(&self, index: usize) -> &[u8] {
        &self.storage()[self.slot_range(index)]
    }

    /// Returns the bytes of the slot at `index` for writing.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the allocation.
    pub fn at_mut(&mut self, index: usize) -> &mut [u8] {
        let slot = self.slot_range(index);
        &mut self.storage_mut()[slot]
    }

    /// Reads the slot at `index` as a native-endian `i32`.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the allocation or is narrower than
    /// four bytes.
    pub fn as_i32(&self, index: usize) -> i32 {
        i32::from_ne_bytes(word(self.at(index)))
    }

    /// Reads the slot at `index` as a native-endian `f32`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ByteVec::as_i32`].
    pub fn as_f32(&self, index: usize) -> f32 {
        f32::from_ne_bytes(word(self.at(index)))
    }

    /// Returns the populated slot at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        (index < self.len).then(|| self.at(index))
    }

    /// Checked variant of [`ByteVec::as_i32`].
    ///
    /// Returns `None` past the end or for slots narrower than four bytes.
    pub fn get_i32(&self, index: usize) -> Option<i32> {
        self.get(index)
            .filter(|slot| slot.len() >= 4)
            .map(|slot| i32::from_ne_bytes(word(slot)))
    }

    /// Checked variant of [`ByteVec::as_f32`].
    pub fn get_f32(&self, index: usize) -> Option<f32> {
        self.get(index)
            .filter(|slot| slot.len() >= 4)
            .map(|slot| f32::from_ne_bytes(word(slot)))
    }

    /// Returns the populated region, `len() * element_size()` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage()[..self.len * self.element_size]
    }

    /// Copies the populated region into a [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Consumes the buffer, returning the populated region without copying.
    pub fn into_bytes(self) -> Bytes {
        let used = self.len * self.element_size;
        match self.data {
            Some(block) => {
                let mut bytes = Bytes::from(block);
                bytes.truncate(used);
                bytes
            }
            None => Bytes::new(),
        }
    }

    /// Drops the buffer behind `handle` and leaves `None` in its place.
    ///
    /// Releasing an empty handle does nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use bytevec::{ByteVec, ElementType};
    ///
    /// let mut handle = Some(ByteVec::with_type(4, ElementType::I32)?);
    /// ByteVec::release(&mut handle);
    /// assert!(handle.is_none());
    ///
    /// ByteVec::release(&mut handle);
    /// # Ok::<(), bytevec::VecError>(())
    /// ```
    pub fn release(handle: &mut Option<Self>) {
        if let Some(v) = handle.take() {
            trace!(
                capacity = v.capacity,
                element_size = v.element_size,
                "releasing buffer"
            );
        }
    }

    /// Returns a [`Display`](std::fmt::Display) rendering of the buffer's
    /// metadata and contents.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(Some(self))
    }

    /// Like [`ByteVec::dump`], but also renders an absent handle.
    pub fn dump_handle(handle: Option<&Self>) -> Dump<'_> {
        Dump::new(handle)
    }

    fn storage(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        self.data.as_deref_mut().unwrap_or_default()
    }

    /// Byte range of the slot at `index`.
    ///
    /// Panics if the offset overflows, which can only mean the slot lies
    /// outside any possible allocation.
    fn slot_range(&self, index: usize) -> Range<usize> {
        let end = index
            .checked_mul(self.element_size)
            .and_then(|start| start.checked_add(self.element_size));
        match end {
            Some(end) => end - self.element_size..end,
            None => panic!(
                "slot {} of {} bytes lies outside the allocation",
                index, self.element_size
            ),
        }
    }

    /// Moves the contents into a fresh block of `capacity` elements.
    ///
    /// `capacity` must exceed the current capacity.
    fn reallocate(&mut self, capacity: usize) -> Result<(), VecError> {
        let bytes =
            block_size(capacity, self.element_size).ok_or(VecError::CapacityOverflow {
                capacity,
                element_size: self.element_size,
            })?;

        trace!(
            from = self.capacity,
            to = capacity,
            element_size = self.element_size,
            bytes,
            "reallocating buffer"
        );

        self.data = Some(zeroed_block(bytes, self.storage())?);
        self.capacity = capacity;
        self.reallocations += 1;
        Ok(())
    }
}

/// Allocates a `bytes`-long block starting with a copy of `prefix` and
/// zero-filled after it.
fn zeroed_block(bytes: usize, prefix: &[u8]) -> Result<Box<[u8]>, VecError> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(bytes)
        .map_err(|source| VecError::AllocationFailed { bytes, source })?;
    block.extend_from_slice(prefix);
    block.resize(bytes, 0);
    Ok(block.into_boxed_slice())
}

/// First four bytes of a slot.
fn word(slot: &[u8]) -> [u8; 4] {
    let mut out = [0u8; 4];
    out.copy_from_slice(&slot[..4]);
    out
}
