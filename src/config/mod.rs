//! Configuration for buffer construction and growth.
//!
//! - [`VecConfig`] - Initial capacity, element size and growth policy
//! - [`GrowthPolicy`] - How append grows a full buffer
//!
//! # Example
//!
//! ```
//! use bytevec::{ByteVec, GrowthPolicy, VecConfig};
//!
//! let config = VecConfig::new(0, 8)?.with_growth_policy(GrowthPolicy::Doubling);
//! let v = ByteVec::from_config(config)?;
//! assert_eq!(v.element_size(), 8);
//! # Ok::<(), bytevec::VecError>(())
//! ```

use crate::error::VecError;

/// How [`ByteVec::push`](crate::ByteVec::push) grows a full buffer.
///
/// The default grows by exactly one slot per overflow, so a run of `n`
/// appends onto an empty buffer performs `n` reallocations. `Doubling`
/// is the usual choice when append throughput matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// Grow by one element per overflow.
    #[default]
    Incremental,
    /// Double the capacity per overflow (at least one element).
    Doubling,
}

impl GrowthPolicy {
    /// Returns the capacity a full buffer of `current` elements grows to.
    ///
    /// Returns `None` on arithmetic overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use bytevec::GrowthPolicy;
    ///
    /// assert_eq!(GrowthPolicy::Incremental.next_capacity(4), Some(5));
    /// assert_eq!(GrowthPolicy::Doubling.next_capacity(0), Some(1));
    /// assert_eq!(GrowthPolicy::Doubling.next_capacity(4), Some(8));
    /// ```
    pub const fn next_capacity(self, current: usize) -> Option<usize> {
        match self {
            GrowthPolicy::Incremental => current.checked_add(1),
            GrowthPolicy::Doubling => {
                if current == 0 {
                    Some(1)
                } else {
                    current.checked_mul(2)
                }
            }
        }
    }
}

/// Byte size of `capacity` elements, or `None` past the largest possible
/// allocation (`isize::MAX` bytes).
pub(crate) const fn block_size(capacity: usize, element_size: usize) -> Option<usize> {
    match capacity.checked_mul(element_size) {
        Some(bytes) if bytes <= isize::MAX as usize => Some(bytes),
        _ => None,
    }
}

/// Construction parameters for a [`ByteVec`](crate::ByteVec).
///
/// `element_size` must be non-zero and `capacity * element_size` must not
/// exceed `isize::MAX` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VecConfig {
    capacity: usize,
    element_size: usize,
    growth: GrowthPolicy,
}

impl VecConfig {
    /// Creates a validated configuration with the default growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::InvalidElementSize`] if `element_size` is zero, or
    /// [`VecError::CapacityOverflow`] if the byte size overflows.
    pub fn new(capacity: usize, element_size: usize) -> Result<Self, VecError> {
        if element_size == 0 {
            return Err(VecError::InvalidElementSize);
        }

        if block_size(capacity, element_size).is_none() {
            return Err(VecError::CapacityOverflow {
                capacity,
                element_size,
            });
        }

        Ok(Self {
            capacity,
            element_size,
            growth: GrowthPolicy::default(),
        })
    }

    /// Sets the initial capacity.
    ///
    /// Note: This does not validate the configuration. Use [`VecConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the element size.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_element_size(mut self, element_size: usize) -> Self {
        self.element_size = element_size;
        self
    }

    /// Sets the growth policy.
    pub fn with_growth_policy(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Returns the initial capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element size in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the growth policy.
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use bytevec::VecConfig;
    ///
    /// let config = VecConfig::new(4, 4)?.with_element_size(0);
    /// assert!(config.validate().is_err());
    /// # Ok::<(), bytevec::VecError>(())
    /// ```
    pub fn validate(&self) -> Result<(), VecError> {
        Self::new(self.capacity, self.element_size).map(|_| ())
    }
}
