//! Fixed-capacity deque

use std::collections::vec_deque::{self, VecDeque};

use super::{CapacityError, Deque};

/// A deque that holds at most `capacity` items.
///
/// `offer_*` return `false` and `add_*`/`push` return a [`CapacityError`]
/// once the deque is full. A capacity of zero refuses every item.
///
/// With the `serde` feature the deque serializes as `{"capacity": n, "items":
/// [...]}`; deserializing more items than the capacity fails.
///
/// # Example
///
/// ```rust
/// use lambdax::deque::{BoundedDeque, Deque};
///
/// let mut recent = BoundedDeque::new(2);
/// assert!(recent.offer_last("a"));
/// assert!(recent.offer_last("b"));
/// assert!(!recent.offer_last("c"));
/// assert!(recent.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "BoundedDequeRepr<E>", bound(deserialize = "E: serde::Deserialize<'de>"))
)]
pub struct BoundedDeque<E> {
    capacity: usize,
    items: VecDeque<E>,
}

impl<E> BoundedDeque<E> {
    /// Create an empty deque holding at most `capacity` items.
    ///
    /// `capacity` is only a limit; storage grows as items arrive.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::new(),
        }
    }

    /// Create a deque pre-filled with `items`, front to back.
    ///
    /// Fails when there are more items than `capacity`.
    ///
    /// ```rust
    /// use lambdax::deque::BoundedDeque;
    ///
    /// assert!(BoundedDeque::with_items(2, [1, 2]).is_ok());
    /// assert!(BoundedDeque::with_items(2, [1, 2, 3]).is_err());
    /// ```
    pub fn with_items<I>(capacity: usize, items: I) -> Result<Self, CapacityError>
    where
        I: IntoIterator<Item = E>,
    {
        let items: VecDeque<E> = items.into_iter().collect();
        if items.len() > capacity {
            return Err(CapacityError::new(capacity));
        }
        Ok(Self { capacity, items })
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the deque holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item would be refused.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Iterate front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, E> {
        self.items.iter()
    }

    /// Remove and return the front item.
    pub fn pop_front(&mut self) -> Option<E> {
        self.items.pop_front()
    }

    /// Remove and return the back item.
    pub fn pop_back(&mut self) -> Option<E> {
        self.items.pop_back()
    }

    /// Unwrap into the underlying `VecDeque`.
    pub fn into_inner(self) -> VecDeque<E> {
        self.items
    }

    fn ensure_room(&self) -> Result<(), CapacityError> {
        if self.is_full() {
            Err(CapacityError::new(self.capacity))
        } else {
            Ok(())
        }
    }
}

impl<E: PartialEq> Deque<E> for BoundedDeque<E> {
    fn contains(&self, item: &E) -> bool {
        self.items.contains(item)
    }

    fn offer_first(&mut self, item: E) -> bool {
        self.add_first(item).is_ok()
    }

    fn offer_last(&mut self, item: E) -> bool {
        self.add_last(item).is_ok()
    }

    fn add_first(&mut self, item: E) -> Result<(), CapacityError> {
        self.ensure_room()?;
        self.items.push_front(item);
        Ok(())
    }

    fn add_last(&mut self, item: E) -> Result<(), CapacityError> {
        self.ensure_room()?;
        self.items.push_back(item);
        Ok(())
    }

    fn remove_first_occurrence(&mut self, item: &E) -> bool {
        Deque::remove_first_occurrence(&mut self.items, item)
    }

    fn remove_last_occurrence(&mut self, item: &E) -> bool {
        Deque::remove_last_occurrence(&mut self.items, item)
    }
}

impl<'a, E> IntoIterator for &'a BoundedDeque<E> {
    type Item = &'a E;
    type IntoIter = vec_deque::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E, const N: usize> PartialEq<[E; N]> for BoundedDeque<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &[E; N]) -> bool {
        self.items == *other
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoundedDequeRepr<E> {
    capacity: usize,
    items: VecDeque<E>,
}

#[cfg(feature = "serde")]
impl<E> TryFrom<BoundedDequeRepr<E>> for BoundedDeque<E> {
    type Error = CapacityError;

    fn try_from(repr: BoundedDequeRepr<E>) -> Result<Self, Self::Error> {
        BoundedDeque::with_items(repr.capacity, repr.items)
    }
}
