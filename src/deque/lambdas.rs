//! Deque lambda factories
//!
//! Each factory captures an item and returns a small value that performs one
//! [`Deque`] operation per invocation. Inserting lambdas clone the captured
//! item on every call, so one lambda can be applied to many deques.

use super::{CapacityError, Deque, Mutation};
use crate::predicate::Predicate;

macro_rules! deque_lambda {
    (
        $(#[$doc:meta])*
        $name:ident = $ctor:ident, E: $bound:ident,
        |$deque:ident, $item:ident| -> $out:ty { $($body:tt)* }
    ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name<E>(E);

        impl<E: $bound, D: Deque<E> + ?Sized> Mutation<D> for $name<E> {
            type Output = $out;

            #[inline]
            fn apply(&self, $deque: &mut D) -> $out {
                let $item = &self.0;
                $($body)*
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] lambda for `item`.")]
        pub fn $ctor<E: $bound>(item: E) -> $name<E> {
            $name(item)
        }
    };
}

/// Predicate that checks whether a deque holds an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contains<E>(E);

impl<E: PartialEq, D: Deque<E> + ?Sized> Predicate<D> for Contains<E> {
    #[inline]
    fn test(&self, deque: &D) -> bool {
        deque.contains(&self.0)
    }
}

/// Create a predicate that checks whether a deque holds `item`.
///
/// # Example
///
/// ```rust
/// use std::collections::VecDeque;
/// use lambdax::deque::contains;
/// use lambdax::predicate::Predicate;
///
/// assert!(contains(2).test(&VecDeque::from([1, 2, 3])));
/// assert!(!contains(4).test(&VecDeque::from([1, 2, 3])));
/// ```
pub fn contains<E: PartialEq>(item: E) -> Contains<E> {
    Contains(item)
}

deque_lambda!(
    /// Appends the item and reports `Ok(true)`, or the capacity failure.
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use lambdax::deque::{add, Mutation};
    ///
    /// let mut deque = VecDeque::from([1]);
    /// assert_eq!(add(2).apply(&mut deque), Ok(true));
    /// assert_eq!(deque, [1, 2]);
    /// ```
    Add = add, E: Clone,
    |deque, item| -> Result<bool, CapacityError> { deque.add_last(item.clone()).map(|()| true) }
);

deque_lambda!(
    /// Appends the item, discarding the success flag.
    OnlyAdd = only_add, E: Clone,
    |deque, item| -> Result<(), CapacityError> { deque.add_last(item.clone()) }
);

deque_lambda!(
    /// Inserts the item at the front.
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use lambdax::deque::{add_first, Mutation};
    ///
    /// let mut deque = VecDeque::from([1, 2, 3]);
    /// add_first(5).apply(&mut deque).unwrap();
    /// assert_eq!(deque, [5, 1, 2, 3]);
    /// ```
    AddFirst = add_first, E: Clone,
    |deque, item| -> Result<(), CapacityError> { deque.add_first(item.clone()) }
);

deque_lambda!(
    /// Inserts the item at the back.
    AddLast = add_last, E: Clone,
    |deque, item| -> Result<(), CapacityError> { deque.add_last(item.clone()) }
);

deque_lambda!(
    /// Tries to append the item; `false` when the deque is full.
    Offer = offer, E: Clone,
    |deque, item| -> bool { deque.offer_last(item.clone()) }
);

deque_lambda!(
    /// Tries to append the item, ignoring whether there was room.
    OnlyOffer = only_offer, E: Clone,
    |deque, item| -> () { deque.offer_last(item.clone()); }
);

deque_lambda!(
    /// Tries to insert the item at the front; `false` when the deque is full.
    OfferFirst = offer_first, E: Clone,
    |deque, item| -> bool { deque.offer_first(item.clone()) }
);

deque_lambda!(
    /// Tries to insert the item at the front, ignoring whether there was room.
    OnlyOfferFirst = only_offer_first, E: Clone,
    |deque, item| -> () { deque.offer_first(item.clone()); }
);

deque_lambda!(
    /// Tries to append the item; `false` when the deque is full.
    OfferLast = offer_last, E: Clone,
    |deque, item| -> bool { deque.offer_last(item.clone()) }
);

deque_lambda!(
    /// Tries to append the item, ignoring whether there was room.
    OnlyOfferLast = only_offer_last, E: Clone,
    |deque, item| -> () { deque.offer_last(item.clone()); }
);

deque_lambda!(
    /// Pushes the item onto the front, stack style.
    Push = push, E: Clone,
    |deque, item| -> Result<(), CapacityError> { deque.push(item.clone()) }
);

deque_lambda!(
    /// Removes the first occurrence of the item; `true` if one was removed.
    Remove = remove, E: PartialEq,
    |deque, item| -> bool { deque.remove_first_occurrence(item) }
);

deque_lambda!(
    /// Removes the first occurrence of the item, if any.
    OnlyRemove = only_remove, E: PartialEq,
    |deque, item| -> () { deque.remove_first_occurrence(item); }
);

deque_lambda!(
    /// Removes the first occurrence of the item; `true` if one was removed.
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use lambdax::deque::{remove_first_occurrence, Mutation};
    ///
    /// let mut deque = VecDeque::from([1, 2, 2, 3]);
    /// assert!(remove_first_occurrence(2).apply(&mut deque));
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    RemoveFirstOccurrence = remove_first_occurrence, E: PartialEq,
    |deque, item| -> bool { deque.remove_first_occurrence(item) }
);

deque_lambda!(
    /// Removes the first occurrence of the item, if any.
    OnlyRemoveFirstOccurrence = only_remove_first_occurrence, E: PartialEq,
    |deque, item| -> () { deque.remove_first_occurrence(item); }
);

deque_lambda!(
    /// Removes the last occurrence of the item; `true` if one was removed.
    RemoveLastOccurrence = remove_last_occurrence, E: PartialEq,
    |deque, item| -> bool { deque.remove_last_occurrence(item) }
);

deque_lambda!(
    /// Removes the last occurrence of the item, if any.
    OnlyRemoveLastOccurrence = only_remove_last_occurrence, E: PartialEq,
    |deque, item| -> () { deque.remove_last_occurrence(item); }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deque::BoundedDeque;
    use crate::predicate::and;
    use std::collections::VecDeque;

    #[test]
    fn test_add_first_prepends() {
        let mut deque = VecDeque::from([1, 2, 3]);
        assert_eq!(add_first(5).apply(&mut deque), Ok(()));
        assert_eq!(deque, [5, 1, 2, 3]);
    }

    #[test]
    fn test_remove_first_occurrence_removes_one() {
        let mut deque = VecDeque::from([1, 2, 2, 3]);
        assert!(remove_first_occurrence(2).apply(&mut deque));
        assert_eq!(deque, [1, 2, 3]);
        assert!(!remove_first_occurrence(9).apply(&mut deque));
    }

    #[test]
    fn test_remove_last_occurrence_keeps_order() {
        let mut deque = VecDeque::from(["a", "b", "a"]);
        assert!(remove_last_occurrence("a").apply(&mut deque));
        assert_eq!(deque, ["a", "b"]);
        only_remove_last_occurrence("a").apply(&mut deque);
        only_remove_first_occurrence("z").apply(&mut deque);
        assert_eq!(deque, ["b"]);
    }

    #[test]
    fn test_one_lambda_many_deques() {
        let tag = add(String::from("seen"));
        let mut left: VecDeque<String> = VecDeque::new();
        let mut right = VecDeque::from([String::from("old")]);

        assert_eq!(tag.apply(&mut left), Ok(true));
        assert_eq!(tag.apply(&mut right), Ok(true));
        assert_eq!(tag.apply(&mut right), Ok(true));
        assert_eq!(left, ["seen"]);
        assert_eq!(right, ["old", "seen", "seen"]);
    }

    #[test]
    fn test_push_and_stack_order() {
        let mut stack = VecDeque::new();
        for n in 1..=3 {
            push(n).apply(&mut stack).unwrap();
        }
        assert_eq!(stack, [3, 2, 1]);
        assert!(remove(2).apply(&mut stack));
        only_remove(3).apply(&mut stack);
        assert_eq!(stack, [1]);
    }

    #[test]
    fn test_offers_on_full_bounded_deque() {
        let mut deque = BoundedDeque::with_items(2, [1, 2]).unwrap();

        assert!(!offer(3).apply(&mut deque));
        assert!(!offer_first(3).apply(&mut deque));
        assert!(!offer_last(3).apply(&mut deque));
        only_offer(3).apply(&mut deque);
        only_offer_first(3).apply(&mut deque);
        only_offer_last(3).apply(&mut deque);
        assert_eq!(deque, [1, 2]);
    }

    #[test]
    fn test_adds_on_full_bounded_deque_propagate_error() {
        let mut deque = BoundedDeque::with_items(1, ['x']).unwrap();
        let full: Result<(), CapacityError> = Err(CapacityError::new(1));

        assert_eq!(add('y').apply(&mut deque), full.map(|()| true));
        assert_eq!(only_add('y').apply(&mut deque), full);
        assert_eq!(add_first('y').apply(&mut deque), full);
        assert_eq!(add_last('y').apply(&mut deque), full);
        assert_eq!(push('y').apply(&mut deque), full);
        assert_eq!(deque, ['x']);
    }

    #[test]
    fn test_contains_on_both_deque_kinds() {
        let deque = BoundedDeque::with_items(3, [1, 2]).unwrap();
        assert!(contains(1).test(&deque));
        assert!(!contains(3).test(&deque));

        let has_both = and(contains(1), contains(2));
        assert!(has_both.test(&VecDeque::from([2, 1])));
    }
}
