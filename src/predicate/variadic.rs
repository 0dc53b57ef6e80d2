//! N-ary logical combinators
//!
//! Every connective has two n-ary forms taking a mandatory `first` and
//! `second` operand plus any number of further operands:
//!
//! - `and_all(first, second, others)` and friends take the extra operands as
//!   an iterator of one predicate type (box mixed types with
//!   [`PredicateExt::boxed`](super::PredicateExt::boxed)).
//! - The [`and!`](crate::and), [`or!`](crate::or), [`xor!`](crate::xor),
//!   [`nand!`](crate::nand), [`nor!`](crate::nor) and [`xnor!`](crate::xnor)
//!   macros take any mix of predicate expressions and fold them left to right
//!   into nested binary combinators.
//!
//! Every form folds left-associatively with its binary connective:
//! `nand!(a, b, c)` is `nand(nand(a, b), c)`. Each binary step keeps its own
//! short-circuit, so `and` stops at the first `false` operand and `or` at the
//! first `true`. `xor` yields odd parity of the true operands. The `nand`,
//! `nor` and `xnor` folds are not the negations of the n-ary `and`, `or` and
//! `xor` once there are three or more operands.

use super::combinators::Predicate;

/// AND over two mandatory predicates and a list of further ones.
#[derive(Clone, Debug)]
pub struct AndAll<P1, P2, P> {
    first: P1,
    second: P2,
    others: Vec<P>,
}

impl<T: ?Sized, P1, P2, P> Predicate<T> for AndAll<P1, P2, P>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.first.test(value)
            && self.second.test(value)
            && self.others.iter().all(|p| p.test(value))
    }
}

/// OR over two mandatory predicates and a list of further ones.
#[derive(Clone, Debug)]
pub struct OrAll<P1, P2, P> {
    first: P1,
    second: P2,
    others: Vec<P>,
}

impl<T: ?Sized, P1, P2, P> Predicate<T> for OrAll<P1, P2, P>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.first.test(value)
            || self.second.test(value)
            || self.others.iter().any(|p| p.test(value))
    }
}

/// XOR over two mandatory predicates and a list of further ones.
///
/// True when an odd number of operands are true. Every operand is evaluated.
#[derive(Clone, Debug)]
pub struct XorAll<P1, P2, P> {
    first: P1,
    second: P2,
    others: Vec<P>,
}

impl<T: ?Sized, P1, P2, P> Predicate<T> for XorAll<P1, P2, P>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        let head = self.first.test(value) ^ self.second.test(value);
        self.others
            .iter()
            .fold(head, |parity, p| parity ^ p.test(value))
    }
}

/// Create a short-circuiting AND of `first`, `second` and `others`.
///
/// Operands are evaluated left to right; evaluation stops at the first
/// `false`. An empty `others` behaves exactly like [`and`](super::and).
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let p = and_all(gt(0), lt(100), [ne(13), ne(42)]);
/// assert!(p.test(&7));
/// assert!(!p.test(&42));
/// ```
pub fn and_all<P1, P2, I>(first: P1, second: P2, others: I) -> AndAll<P1, P2, I::Item>
where
    I: IntoIterator,
{
    AndAll {
        first,
        second,
        others: others.into_iter().collect(),
    }
}

/// Create a short-circuiting OR of `first`, `second` and `others`.
///
/// Evaluation stops at the first `true`.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let special = or_all(eq(1), eq(5), [eq(10)]);
/// assert!(special.test(&10));
/// assert!(!special.test(&7));
/// ```
pub fn or_all<P1, P2, I>(first: P1, second: P2, others: I) -> OrAll<P1, P2, I::Item>
where
    I: IntoIterator,
{
    OrAll {
        first,
        second,
        others: others.into_iter().collect(),
    }
}

/// Create an XOR of `first`, `second` and `others`: odd parity.
pub fn xor_all<P1, P2, I>(first: P1, second: P2, others: I) -> XorAll<P1, P2, I::Item>
where
    I: IntoIterator,
{
    XorAll {
        first,
        second,
        others: others.into_iter().collect(),
    }
}

/// NAND folded left over two mandatory predicates and a list of further ones.
///
/// Each step computes `!(acc && next)`; `next` is skipped when `acc` is
/// `false`.
#[derive(Clone, Debug)]
pub struct NandAll<P1, P2, P> {
    first: P1,
    second: P2,
    others: Vec<P>,
}

impl<T: ?Sized, P1, P2, P> Predicate<T> for NandAll<P1, P2, P>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        let head = !(self.first.test(value) && self.second.test(value));
        self.others
            .iter()
            .fold(head, |acc, p| !(acc && p.test(value)))
    }
}

/// NOR folded left over two mandatory predicates and a list of further ones.
///
/// Each step computes `!(acc || next)`; `next` is skipped when `acc` is
/// `true`.
#[derive(Clone, Debug)]
pub struct NorAll<P1, P2, P> {
    first: P1,
    second: P2,
    others: Vec<P>,
}

impl<T: ?Sized, P1, P2, P> Predicate<T> for NorAll<P1, P2, P>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        let head = !(self.first.test(value) || self.second.test(value));
        self.others
            .iter()
            .fold(head, |acc, p| !(acc || p.test(value)))
    }
}

/// XNOR folded left over two mandatory predicates and a list of further ones.
///
/// Every operand is evaluated.
#[derive(Clone, Debug)]
pub struct XnorAll<P1, P2, P> {
    first: P1,
    second: P2,
    others: Vec<P>,
}

impl<T: ?Sized, P1, P2, P> Predicate<T> for XnorAll<P1, P2, P>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        let head = self.first.test(value) == self.second.test(value);
        self.others
            .iter()
            .fold(head, |acc, p| acc == p.test(value))
    }
}

/// Create a left fold of NAND over `first`, `second` and `others`.
///
/// `nand_all(a, b, [c])` behaves like `nand(nand(a, b), c)`.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// // !(!(true && true) && true)
/// assert!(nand_all(truth(), truth(), [truth()]).test(&()));
/// ```
pub fn nand_all<P1, P2, I>(first: P1, second: P2, others: I) -> NandAll<P1, P2, I::Item>
where
    I: IntoIterator,
{
    NandAll {
        first,
        second,
        others: others.into_iter().collect(),
    }
}

/// Create a left fold of NOR over `first`, `second` and `others`.
pub fn nor_all<P1, P2, I>(first: P1, second: P2, others: I) -> NorAll<P1, P2, I::Item>
where
    I: IntoIterator,
{
    NorAll {
        first,
        second,
        others: others.into_iter().collect(),
    }
}

/// Create a left fold of XNOR over `first`, `second` and `others`.
pub fn xnor_all<P1, P2, I>(first: P1, second: P2, others: I) -> XnorAll<P1, P2, I::Item>
where
    I: IntoIterator,
{
    XnorAll {
        first,
        second,
        others: others.into_iter().collect(),
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fold_predicates {
    ($combine:path; $acc:expr) => {
        $acc
    };
    ($combine:path; $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::__fold_predicates!($combine; $combine($acc, $next) $(, $rest)*)
    };
}

/// Short-circuiting AND of two or more predicates of any types.
///
/// `and!(a, b, c)` expands to `and(and(a, b), c)`.
///
/// # Example
///
/// ```rust
/// use lambdax::and;
/// use lambdax::predicate::*;
///
/// let p = and!(gt(0), lt(10), |x: &i32| x % 2 == 0);
/// assert!(p.test(&4));
/// assert!(!p.test(&5));
/// assert!(!p.test(&-2));
/// ```
#[macro_export]
macro_rules! and {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::__fold_predicates!(
            $crate::predicate::and;
            $crate::predicate::and($first, $second) $(, $rest)*
        )
    };
}

/// Short-circuiting OR of two or more predicates of any types.
///
/// `or!(a, b, c)` expands to `or(or(a, b), c)`.
#[macro_export]
macro_rules! or {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::__fold_predicates!(
            $crate::predicate::or;
            $crate::predicate::or($first, $second) $(, $rest)*
        )
    };
}

/// XOR of two or more predicates of any types: odd parity.
///
/// `xor!(a, b, c)` expands to `xor(xor(a, b), c)`.
#[macro_export]
macro_rules! xor {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::__fold_predicates!(
            $crate::predicate::xor;
            $crate::predicate::xor($first, $second) $(, $rest)*
        )
    };
}

/// NAND of two or more predicates of any types, folded left.
///
/// `nand!(a, b, c)` expands to `nand(nand(a, b), c)`.
#[macro_export]
macro_rules! nand {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::__fold_predicates!(
            $crate::predicate::nand;
            $crate::predicate::nand($first, $second) $(, $rest)*
        )
    };
}

/// NOR of two or more predicates of any types, folded left.
///
/// `nor!(a, b, c)` expands to `nor(nor(a, b), c)`.
#[macro_export]
macro_rules! nor {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::__fold_predicates!(
            $crate::predicate::nor;
            $crate::predicate::nor($first, $second) $(, $rest)*
        )
    };
}

/// XNOR of two or more predicates of any types, folded left.
///
/// `xnor!(a, b, c)` expands to `xnor(xnor(a, b), c)`.
#[macro_export]
macro_rules! xnor {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::__fold_predicates!(
            $crate::predicate::xnor;
            $crate::predicate::xnor($first, $second) $(, $rest)*
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{and, gt, lie, lt, nand, nor, truth, xnor, BoxedPredicate, PredicateExt};
    use std::cell::Cell;

    #[test]
    fn test_bounded_even_scenario() {
        let third_calls = Cell::new(0);
        let even = |x: &i32| {
            third_calls.set(third_calls.get() + 1);
            x % 2 == 0
        };
        let p = crate::and!(|x: &i32| *x > 0, |x: &i32| *x < 10, even);

        assert!(p.test(&4));
        assert!(!p.test(&5));
        assert_eq!(third_calls.get(), 2);

        assert!(!p.test(&-2));
        assert_eq!(third_calls.get(), 2);
    }

    #[test]
    fn test_macro_matches_nested_binary() {
        let nested = and(and(gt(0), lt(10)), |x: &i32| x % 3 == 0);
        let folded = crate::and!(gt(0), lt(10), |x: &i32| x % 3 == 0);
        for x in -3..15 {
            assert_eq!(folded.test(&x), nested.test(&x));
        }
    }

    #[test]
    fn test_empty_others_is_binary() {
        let none: [fn(&i32) -> bool; 0] = [];
        for x in [-1, 5, 20] {
            assert_eq!(and_all(gt(0), lt(10), none).test(&x), gt(0).and(lt(10)).test(&x));
            assert_eq!(or_all(gt(0), lt(10), none).test(&x), gt(0).or(lt(10)).test(&x));
            assert_eq!(xor_all(gt(0), lt(10), none).test(&x), gt(0).xor(lt(10)).test(&x));
        }
    }

    #[test]
    fn test_and_all_stops_at_first_false() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            true
        };
        let others: Vec<BoxedPredicate<'_, ()>> = vec![lie().boxed(), counted.boxed()];

        assert!(!and_all(truth(), truth(), others).test(&()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_or_all_stops_at_first_true() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            false
        };
        let others: Vec<BoxedPredicate<'_, ()>> = vec![truth().boxed(), counted.boxed()];

        assert!(or_all(lie(), lie(), others).test(&()));
        assert!(!nor_all(lie(), lie(), [truth()]).test(&()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_xor_all_evaluates_everything() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            true
        };

        assert!(xor_all(truth(), truth(), [&counted, &counted, &counted]).test(&()));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_parity() {
        let c = |v: bool| move |_: &()| v;
        assert!(crate::xor!(c(true), c(true), c(true)).test(&()));
        assert!(!crate::xor!(c(true), c(true), c(false)).test(&()));
        // xnor(xnor(a, b), c) == a ^ b ^ c for three operands
        assert!(crate::xnor!(c(true), c(false), c(false)).test(&()));
        assert!(!crate::xnor!(c(true), c(true), c(false)).test(&()));
        assert!(crate::xnor!(c(true), c(true), c(false), c(false)).test(&()));
    }

    #[test]
    fn test_negated_forms_fold_left() {
        let c = |v: bool| move |_: &()| v;
        let none: [fn(&()) -> bool; 0] = [];

        for (a, b, x) in [
            (false, false, false),
            (false, true, true),
            (true, false, true),
            (true, true, false),
            (true, true, true),
        ] {
            let nand3 = nand(nand(c(a), c(b)), c(x)).test(&());
            let nor3 = nor(nor(c(a), c(b)), c(x)).test(&());
            let xnor3 = xnor(xnor(c(a), c(b)), c(x)).test(&());

            assert_eq!(crate::nand!(c(a), c(b), c(x)).test(&()), nand3);
            assert_eq!(nand_all(c(a), c(b), [c(x)]).test(&()), nand3);
            assert_eq!(crate::nor!(c(a), c(b), c(x)).test(&()), nor3);
            assert_eq!(nor_all(c(a), c(b), [c(x)]).test(&()), nor3);
            assert_eq!(crate::xnor!(c(a), c(b), c(x)).test(&()), xnor3);
            assert_eq!(xnor_all(c(a), c(b), [c(x)]).test(&()), xnor3);

            assert_eq!(nand_all(c(a), c(b), none).test(&()), nand(c(a), c(b)).test(&()));
            assert_eq!(nor_all(c(a), c(b), none).test(&()), nor(c(a), c(b)).test(&()));
            assert_eq!(xnor_all(c(a), c(b), none).test(&()), xnor(c(a), c(b)).test(&()));
        }
    }

    #[test]
    fn test_nand_of_three_truths_is_true() {
        assert!(nand_all(truth(), truth(), [truth()]).test(&()));
        assert!(crate::nand!(truth(), truth(), truth()).test(&()));
        assert!(!crate::nor!(lie(), lie(), lie()).test(&()));
        assert!(!nor_all(lie(), lie(), [lie()]).test(&()));
    }

    #[test]
    fn test_negated_folds_short_circuit_per_step() {
        let calls = Cell::new(0);
        let counted = |_: &()| {
            calls.set(calls.get() + 1);
            true
        };

        // nand(lie, lie) is true, so the next step evaluates its operand
        assert!(!nand_all(lie(), &counted, [&counted]).test(&()));
        assert_eq!(calls.get(), 1);

        // nand(truth, truth) is false, so the next step skips its operand
        assert!(nand_all(truth(), truth(), [&counted]).test(&()));
        assert_eq!(calls.get(), 1);

        // nor(truth, _) skips the second operand and is false; the next step
        // then evaluates its operand
        assert!(!nor_all(truth(), &counted, [&counted]).test(&()));
        assert_eq!(calls.get(), 2);

        // xnor evaluates every operand
        xnor_all(truth(), &counted, [&counted, &counted]).test(&());
        assert_eq!(calls.get(), 5);
    }
}
