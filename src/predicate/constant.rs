//! Constant and identity predicates

use super::combinators::{Not, Predicate};

/// Predicate that is always true.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Truth;

impl<T: ?Sized> Predicate<T> for Truth {
    #[inline]
    fn test(&self, _value: &T) -> bool {
        true
    }
}

/// Predicate that is always false.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Lie;

impl<T: ?Sized> Predicate<T> for Lie {
    #[inline]
    fn test(&self, _value: &T) -> bool {
        false
    }
}

/// Create a predicate that accepts every value.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// assert!(truth().test(&42));
/// assert!(truth().test("anything"));
/// assert!(truth().test(&None::<i32>));
/// ```
pub fn truth() -> Truth {
    Truth
}

/// Create a predicate that rejects every value.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// assert!(!lie().test(&42));
/// assert!(!lie().test(&None::<i32>));
/// ```
pub fn lie() -> Lie {
    Lie
}

/// Negate a predicate.
///
/// Free-function form of [`PredicateExt::not`](super::PredicateExt::not),
/// handy when the predicate is a closure literal.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let odd = not(|x: &i32| x % 2 == 0);
/// assert!(odd.test(&3));
/// assert!(!odd.test(&4));
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}
