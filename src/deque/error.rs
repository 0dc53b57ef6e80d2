//! Error types for deque operations.

use std::fmt;

/// Error returned when an item is added to a deque that is already full.
///
/// Only fixed-capacity deques produce it; the `offer*` operations report the
/// same condition as `false` instead.
///
/// # Example
///
/// ```rust
/// use lambdax::deque::{BoundedDeque, CapacityError, Deque};
///
/// let mut deque = BoundedDeque::new(1);
/// deque.add_last(1).unwrap();
///
/// assert_eq!(deque.add_last(2), Err(CapacityError::new(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    /// Create a new CapacityError for a deque holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The capacity of the deque that rejected the item.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deque is full (capacity {})", self.capacity)
    }
}

impl std::error::Error for CapacityError {}
