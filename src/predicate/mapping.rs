//! Mapping predicates
//!
//! A [`Mapping`] holds a function from the input to some derived value. It can
//! be refined with further [`map`](Mapping::map) calls and is finally turned
//! into a plain predicate over the original input with
//! [`check`](Mapping::check).
//!
//! ```rust
//! use lambdax::predicate::*;
//!
//! let long_word = of(|s: &str| s.len()).map(|n| n * 2).check(gt(5));
//! assert!(long_word.test("abc"));
//! assert!(!long_word.test("ab"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;
use super::compare::{between, eq, ge, gt, le, lt, ne, Between, Eq, Ge, Gt, Le, Lt, Ne};

/// A function from `&T` to a derived value.
///
/// Implemented for every `Fn(&T) -> R` closure and for the composed mappers
/// built by [`Mapping::map`].
pub trait Mapper<T: ?Sized> {
    /// The derived value.
    type Output;

    /// Derive the value from the input.
    fn apply(&self, value: &T) -> Self::Output;
}

impl<T: ?Sized, R, F> Mapper<T> for F
where
    F: Fn(&T) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, value: &T) -> R {
        self(value)
    }
}

/// Mapper applying `F` and then `G` to its result.
#[derive(Clone, Copy, Debug)]
pub struct AndThen<F, G>(pub F, pub G);

impl<T: ?Sized, F, G, U> Mapper<T> for AndThen<F, G>
where
    F: Mapper<T>,
    G: Fn(F::Output) -> U,
{
    type Output = U;

    #[inline]
    fn apply(&self, value: &T) -> U {
        (self.1)(self.0.apply(value))
    }
}

/// Predicate that maps the input and tests the mapped value.
///
/// Created by [`Mapping::check`] and the comparison helpers on [`Mapping`].
#[derive(Clone, Copy, Debug)]
pub struct Checked<F, P> {
    mapper: F,
    tester: P,
}

impl<T: ?Sized, F, P> Predicate<T> for Checked<F, P>
where
    F: Mapper<T>,
    P: Predicate<F::Output>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.tester.test(&self.mapper.apply(value))
    }
}

/// An immutable holder of a mapping from `&T`, refinable with
/// [`map`](Mapping::map) and terminated with [`check`](Mapping::check).
///
/// Every `map` consumes the wrapper and returns a new one; clone a wrapper
/// to refine it in more than one direction.
pub struct Mapping<T: ?Sized, F> {
    mapper: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Mapping<T, F> {
    pub(crate) fn new(mapper: F) -> Self {
        Self {
            mapper,
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F: Clone> Clone for Mapping<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.mapper.clone())
    }
}

impl<T: ?Sized, F> fmt::Debug for Mapping<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Mapper<T>> Mapping<T, F> {
    /// Compose a further mapping, applied after the ones already held.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let doubled_len = of(|s: &str| s.len()).map(|n| n * 2);
    /// assert_eq!(doubled_len.apply("abc"), 6);
    /// ```
    pub fn map<U, G>(self, mapper: G) -> Mapping<T, AndThen<F, G>>
    where
        G: Fn(F::Output) -> U,
    {
        Mapping::new(AndThen(self.mapper, mapper))
    }

    /// Turn the wrapper into a predicate over `T` that maps the input and
    /// tests the mapped value with `tester`.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let even_len = of(|s: &String| s.len()).check(|n: &usize| n % 2 == 0);
    /// assert!(even_len.test(&"ab".to_string()));
    /// ```
    pub fn check<P>(self, tester: P) -> Checked<F, P>
    where
        P: Predicate<F::Output>,
    {
        Checked {
            mapper: self.mapper,
            tester,
        }
    }

    /// Apply the held mapping directly.
    pub fn apply(&self, value: &T) -> F::Output {
        self.mapper.apply(value)
    }
}

impl<T: ?Sized, F> Mapping<T, F>
where
    F: Mapper<T>,
    F::Output: PartialEq,
{
    /// Mapped value equals `value`.
    pub fn eq(self, value: F::Output) -> Checked<F, Eq<F::Output>> {
        self.check(eq(value))
    }

    /// Mapped value differs from `value`.
    pub fn ne(self, value: F::Output) -> Checked<F, Ne<F::Output>> {
        self.check(ne(value))
    }
}

impl<T: ?Sized, F> Mapping<T, F>
where
    F: Mapper<T>,
    F::Output: PartialOrd,
{
    /// Mapped value is greater than `value`.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let adult = of_ord(|age: &u32| *age).ge(18);
    /// assert!(adult.test(&18));
    /// assert!(!adult.test(&17));
    /// ```
    pub fn gt(self, value: F::Output) -> Checked<F, Gt<F::Output>> {
        self.check(gt(value))
    }

    /// Mapped value is greater than or equal to `value`.
    pub fn ge(self, value: F::Output) -> Checked<F, Ge<F::Output>> {
        self.check(ge(value))
    }

    /// Mapped value is less than `value`.
    pub fn lt(self, value: F::Output) -> Checked<F, Lt<F::Output>> {
        self.check(lt(value))
    }

    /// Mapped value is less than or equal to `value`.
    pub fn le(self, value: F::Output) -> Checked<F, Le<F::Output>> {
        self.check(le(value))
    }

    /// Mapped value lies in `[min, max]`.
    pub fn between(self, min: F::Output, max: F::Output) -> Checked<F, Between<F::Output>> {
        self.check(between(min, max))
    }
}

/// Start a mapping predicate from `mapper`.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// struct User {
///     name: String,
/// }
///
/// let named_bob = of(|u: &User| u.name.clone()).eq("bob".to_string());
/// assert!(named_bob.test(&User { name: "bob".into() }));
/// ```
pub fn of<T, R, F>(mapper: F) -> Mapping<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> R,
{
    Mapping::new(mapper)
}

/// Start a mapping predicate whose mapped value is ordered.
///
/// Same wrapper as [`of`]; the `PartialOrd` bound is checked up front so the
/// comparison helpers are known to be available.
pub fn of_ord<T, R, F>(mapper: F) -> Mapping<T, F>
where
    T: ?Sized,
    R: PartialOrd,
    F: Fn(&T) -> R,
{
    Mapping::new(mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_string_length_doubled() {
        let p = of(|s: &str| s.len()).map(|n| n * 2).check(|n: &usize| *n > 5);
        assert!(p.test("abc"));
        assert!(!p.test("ab"));
    }

    #[test]
    fn test_maps_apply_left_to_right() {
        let p = of(|x: &i32| *x)
            .map(|x| x + 1)
            .map(|x| x * 10)
            .map(|x| x.to_string());
        assert_eq!(p.apply(&2), "30");
        assert!(p.check(|s: &String| s == "30").test(&2));
    }

    #[test]
    fn test_clone_before_refining() {
        let base = of(|s: &str| s.len());
        let short = base.clone().lt(3);
        let long = base.map(|n| n * 2).gt(10);

        assert!(short.test("ab"));
        assert!(!long.test("ab"));
        assert!(long.test("abcdef"));
    }

    #[test]
    fn test_each_mapping_called_once_per_test() {
        let calls = Cell::new(0);
        let p = of(|x: &i32| {
            calls.set(calls.get() + 1);
            *x
        })
        .map(|x| x * x)
        .check(truth_above(3));

        assert!(p.test(&2));
        assert!(!p.test(&1));
        assert_eq!(calls.get(), 2);
    }

    fn truth_above(limit: i32) -> impl Fn(&i32) -> bool {
        move |x| *x > limit
    }

    #[test]
    fn test_comparison_helpers() {
        let len = of_ord(|s: &str| s.len());
        assert!(len.clone().eq(2).test("ab"));
        assert!(len.clone().ne(2).test("abc"));
        assert!(len.clone().ge(2).test("ab"));
        assert!(len.clone().le(2).test("a"));
        assert!(len.clone().between(1, 3).test("abc"));
        assert!(!len.between(1, 3).test(""));
    }

    #[test]
    fn test_checked_composes_with_combinators() {
        let p = crate::predicate::and(
            of(|s: &str| s.len()).gt(1),
            of(|s: &str| s.chars().next()).eq(Some('a')),
        );
        assert!(p.test("ab"));
        assert!(!p.test("a"));
        assert!(!p.test("bb"));
    }
}
