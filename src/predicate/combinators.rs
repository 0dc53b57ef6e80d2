//! Core predicate trait and binary logical combinators
//!
//! This module provides the foundational `Predicate` trait together with one
//! concrete combinator type per logical connective: `And`, `Or`, `Xor`,
//! `Nand`, `Nor`, `Xnor` and `Not`.

use std::fmt;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical connectives:
/// - `and` / `nand`: short-circuit on the first `false`
/// - `or` / `nor`: short-circuit on the first `true`
/// - `xor` / `xnor`: always evaluate both operands
/// - `not`: inverts the predicate
///
/// Any `Fn(&T) -> bool` closure is a predicate.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let in_range = gt(0).and(le(150));
/// assert!(in_range.test(&25));
/// assert!(!in_range.test(&-5));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn test(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical connectives.
/// All methods except [`boxed`](PredicateExt::boxed) return concrete types.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let p = gt(0).and(lt(100)).not();
/// assert!(p.test(&-5));
/// assert!(!p.test(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// `other` is not evaluated when `self` is `false`.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.test(&50));
    /// assert!(!p.test(&0));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// `other` is not evaluated when `self` is `true`.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.test(&-5));
    /// assert!(p.test(&150));
    /// assert!(!p.test(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Combine with XOR logic. Both predicates are always evaluated.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let p = gt(0).xor(gt(10));
    /// assert!(p.test(&5));
    /// assert!(!p.test(&50));
    /// assert!(!p.test(&-1));
    /// ```
    fn xor<P: Predicate<T>>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Combine with NAND logic, the negation of [`and`](PredicateExt::and).
    fn nand<P: Predicate<T>>(self, other: P) -> Nand<Self, P> {
        Nand(self, other)
    }

    /// Combine with NOR logic, the negation of [`or`](PredicateExt::or).
    fn nor<P: Predicate<T>>(self, other: P) -> Nor<Self, P> {
        Nor(self, other)
    }

    /// Combine with XNOR logic: true when both predicates agree.
    fn xnor<P: Predicate<T>>(self, other: P) -> Xnor<Self, P> {
        Xnor(self, other)
    }

    /// Invert the predicate.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let p = gt(0).not();
    /// assert!(p.test(&-5));
    /// assert!(!p.test(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type so predicates of different types can share a
    /// collection, e.g. the `others` of [`and_all`](crate::predicate::and_all).
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let checks: Vec<BoxedPredicate<'_, i32>> = vec![gt(0).boxed(), (|x: &i32| x % 2 == 0).boxed()];
    /// assert!(checks.iter().all(|p| p.test(&4)));
    /// ```
    fn boxed<'a>(self) -> BoxedPredicate<'a, T>
    where
        Self: 'a,
    {
        BoxedPredicate(Box::new(self))
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

/// XOR combinator - exactly one predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Xor<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) ^ self.1.test(value)
    }
}

/// NAND combinator - at least one predicate must be false.
#[derive(Clone, Copy, Debug)]
pub struct Nand<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Nand<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !(self.0.test(value) && self.1.test(value))
    }
}

/// NOR combinator - both predicates must be false.
#[derive(Clone, Copy, Debug)]
pub struct Nor<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Nor<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !(self.0.test(value) || self.1.test(value))
    }
}

/// XNOR combinator - both predicates must agree.
#[derive(Clone, Copy, Debug)]
pub struct Xnor<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Xnor<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) == self.1.test(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

/// A type-erased predicate.
///
/// Created by [`PredicateExt::boxed`].
pub struct BoxedPredicate<'a, T: ?Sized>(Box<dyn Predicate<T> + 'a>);

impl<T: ?Sized> Predicate<T> for BoxedPredicate<'_, T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedPredicate").finish_non_exhaustive()
    }
}

/// Create a predicate that is true only when both predicates are true.
///
/// When `first` is `false`, `second` is not evaluated.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let p = and(gt(0), lt(10));
/// assert!(p.test(&5));
/// assert!(!p.test(&10));
/// ```
pub fn and<P1, P2>(first: P1, second: P2) -> And<P1, P2> {
    And(first, second)
}

/// Create a predicate that is true when either predicate is true.
///
/// When `first` is `true`, `second` is not evaluated.
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1, P2> {
    Or(first, second)
}

/// Create a predicate that is true when exactly one predicate is true.
pub fn xor<P1, P2>(first: P1, second: P2) -> Xor<P1, P2> {
    Xor(first, second)
}

/// Create the negation of [`and`].
pub fn nand<P1, P2>(first: P1, second: P2) -> Nand<P1, P2> {
    Nand(first, second)
}

/// Create the negation of [`or`].
pub fn nor<P1, P2>(first: P1, second: P2) -> Nor<P1, P2> {
    Nor(first, second)
}

/// Create the negation of [`xor`].
pub fn xnor<P1, P2>(first: P1, second: P2) -> Xnor<P1, P2> {
    Xnor(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{gt, lt};
    use std::cell::Cell;

    const TABLE: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

    fn constant(value: bool) -> impl Fn(&()) -> bool {
        move |_| value
    }

    #[test]
    fn test_truth_tables() {
        for (a, b) in TABLE {
            let (p, q) = (constant(a), constant(b));
            assert_eq!(and(&p, &q).test(&()), a && b);
            assert_eq!(or(&p, &q).test(&()), a || b);
            assert_eq!(xor(&p, &q).test(&()), a ^ b);
            assert_eq!(nand(&p, &q).test(&()), !(a && b));
            assert_eq!(nor(&p, &q).test(&()), !(a || b));
            assert_eq!(xnor(&p, &q).test(&()), a == b);
        }
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            true
        };

        assert!(!and(constant(false), &counted).test(&()));
        assert!(nand(constant(false), &counted).test(&()));
        assert_eq!(calls.get(), 0);

        assert!(and(constant(true), &counted).test(&()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            false
        };

        assert!(or(constant(true), &counted).test(&()));
        assert!(!nor(constant(true), &counted).test(&()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_xor_and_xnor_evaluate_both() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            true
        };

        for first in [true, false] {
            xor(constant(first), &counted).test(&());
            xnor(constant(first), &counted).test(&());
        }
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_method_chain() {
        // (0 < x < 10) or (x > 100), negated
        let p = gt(0).and(lt(10)).or(gt(100)).not();
        assert!(p.test(&0));
        assert!(p.test(&50));
        assert!(!p.test(&5));
        assert!(!p.test(&150));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.test(&4));

        let even_and_positive = is_even.and(gt(0));
        assert!(even_and_positive.test(&4));
        assert!(!even_and_positive.test(&-4));
        assert!(is_even.xnor(gt(0)).test(&-3));
    }

    #[test]
    fn test_unsized_input() {
        let p = (|s: &str| s.is_empty()).or(|s: &str| s.starts_with('#'));
        assert!(p.test(""));
        assert!(p.test("#comment"));
        assert!(!p.test("value"));
    }

    #[test]
    fn test_boxed_erases_type() {
        let boxed = gt(3).nor(lt(0)).boxed();
        assert!(boxed.test(&1));
        assert!(!boxed.test(&4));
        assert_eq!(format!("{:?}", boxed), "BoxedPredicate { .. }");
    }
}
