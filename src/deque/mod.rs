//! Deque lambdas
//!
//! Factories that capture one item and return a predicate or a consumer
//! performing a single operation on a double-ended queue. They plug into
//! functional pipelines where the deque is the value flowing through:
//!
//! ```rust
//! use std::collections::VecDeque;
//! use lambdax::deque::{self, Mutation};
//! use lambdax::predicate::Predicate;
//!
//! let mut queues = vec![VecDeque::from([1, 2]), VecDeque::from([3])];
//! queues.iter_mut().for_each(|q| deque::only_offer_first(0).apply(q));
//!
//! let with_three: Vec<_> = queues.iter().filter(|q| deque::contains(3).test(*q)).collect();
//! assert_eq!(with_three, [&VecDeque::from([0, 3])]);
//! ```
//!
//! Predicate-shaped lambdas (`add`, `offer*`, `remove*`) hand back the result
//! of the operation. Consumer-shaped lambdas (`only_*`, `add_first`,
//! `add_last`, `push`) discard it. Capacity failures of `add*` and `push` are
//! returned as [`CapacityError`] in both shapes.

mod bounded;
mod error;
mod lambdas;

use std::collections::VecDeque;

pub use bounded::BoundedDeque;
pub use error::CapacityError;
pub use lambdas::{
    add, add_first, add_last, contains, offer, offer_first, offer_last, only_add, only_offer,
    only_offer_first, only_offer_last, only_remove, only_remove_first_occurrence,
    only_remove_last_occurrence, push, remove, remove_first_occurrence, remove_last_occurrence,
    Add, AddFirst, AddLast, Contains, Offer, OfferFirst, OfferLast, OnlyAdd, OnlyOffer,
    OnlyOfferFirst, OnlyOfferLast, OnlyRemove, OnlyRemoveFirstOccurrence,
    OnlyRemoveLastOccurrence, Push, Remove, RemoveFirstOccurrence, RemoveLastOccurrence,
};

/// An ordered double-ended container.
///
/// `offer_*` attempt an insertion and report `false` when there is no room;
/// `add_*` report the same condition as a [`CapacityError`]. Unbounded
/// containers never refuse an item.
pub trait Deque<E> {
    /// Whether an item equal to `item` is present.
    fn contains(&self, item: &E) -> bool;

    /// Insert at the front if there is room.
    fn offer_first(&mut self, item: E) -> bool;

    /// Insert at the back if there is room.
    fn offer_last(&mut self, item: E) -> bool;

    /// Insert at the front, failing when full.
    fn add_first(&mut self, item: E) -> Result<(), CapacityError>;

    /// Insert at the back, failing when full.
    fn add_last(&mut self, item: E) -> Result<(), CapacityError>;

    /// Stack-style push: same as [`add_first`](Deque::add_first).
    fn push(&mut self, item: E) -> Result<(), CapacityError> {
        self.add_first(item)
    }

    /// Remove the first item equal to `item`; `true` if one was removed.
    fn remove_first_occurrence(&mut self, item: &E) -> bool;

    /// Remove the last item equal to `item`; `true` if one was removed.
    fn remove_last_occurrence(&mut self, item: &E) -> bool;
}

impl<E: PartialEq> Deque<E> for VecDeque<E> {
    fn contains(&self, item: &E) -> bool {
        VecDeque::contains(self, item)
    }

    fn offer_first(&mut self, item: E) -> bool {
        self.push_front(item);
        true
    }

    fn offer_last(&mut self, item: E) -> bool {
        self.push_back(item);
        true
    }

    fn add_first(&mut self, item: E) -> Result<(), CapacityError> {
        self.push_front(item);
        Ok(())
    }

    fn add_last(&mut self, item: E) -> Result<(), CapacityError> {
        self.push_back(item);
        Ok(())
    }

    fn remove_first_occurrence(&mut self, item: &E) -> bool {
        match self.iter().position(|e| e == item) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }

    fn remove_last_occurrence(&mut self, item: &E) -> bool {
        match self.iter().rposition(|e| e == item) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }
}

/// A one-shot operation on a mutable target, such as a deque.
///
/// Implemented by every lambda in this module and by any `Fn(&mut D) -> O`
/// closure.
pub trait Mutation<D: ?Sized> {
    /// What the operation reports back.
    type Output;

    /// Perform the operation on `target`.
    fn apply(&self, target: &mut D) -> Self::Output;
}

impl<D: ?Sized, O, F> Mutation<D> for F
where
    F: Fn(&mut D) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, target: &mut D) -> O {
        self(target)
    }
}
