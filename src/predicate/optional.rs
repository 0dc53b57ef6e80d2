//! Mapping predicates over values that may be absent
//!
//! [`OptionalMapping`] holds a mapper returning `Option<R>`. Its predicates are
//! presence-gated: when the mapper yields `None` the predicate built by
//! [`check`](OptionalMapping::check) is `false` and the tester is never run.

use std::fmt;
use std::marker::PhantomData;

use super::combinators::{Not, Predicate};
use super::compare::{between, eq, ge, gt, le, lt, ne, Between, Eq, Ge, Gt, Le, Lt, Ne};
use super::mapping::{Mapper, Mapping};

/// Mapper applying `G` to a present value.
#[derive(Clone, Copy, Debug)]
pub struct MapSome<F, G>(pub F, pub G);

impl<T: ?Sized, R, U, F, G> Mapper<T> for MapSome<F, G>
where
    F: Mapper<T, Output = Option<R>>,
    G: Fn(R) -> U,
{
    type Output = Option<U>;

    #[inline]
    fn apply(&self, value: &T) -> Option<U> {
        self.0.apply(value).map(&self.1)
    }
}

/// Mapper chaining a further optional mapping onto a present value.
#[derive(Clone, Copy, Debug)]
pub struct FlatMapSome<F, G>(pub F, pub G);

impl<T: ?Sized, R, U, F, G> Mapper<T> for FlatMapSome<F, G>
where
    F: Mapper<T, Output = Option<R>>,
    G: Fn(R) -> Option<U>,
{
    type Output = Option<U>;

    #[inline]
    fn apply(&self, value: &T) -> Option<U> {
        self.0.apply(value).and_then(&self.1)
    }
}

/// Mapper substituting a fallback for an absent value.
#[derive(Clone, Copy, Debug)]
pub struct UnwrapOr<F, R> {
    mapper: F,
    fallback: R,
}

impl<T: ?Sized, R: Clone, F> Mapper<T> for UnwrapOr<F, R>
where
    F: Mapper<T, Output = Option<R>>,
{
    type Output = R;

    #[inline]
    fn apply(&self, value: &T) -> R {
        self.mapper
            .apply(value)
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Predicate that tests a present mapped value and rejects an absent one.
#[derive(Clone, Copy, Debug)]
pub struct CheckedSome<F, P> {
    mapper: F,
    tester: P,
}

impl<T: ?Sized, R, F, P> Predicate<T> for CheckedSome<F, P>
where
    F: Mapper<T, Output = Option<R>>,
    P: Predicate<R>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        match self.mapper.apply(value) {
            Some(mapped) => self.tester.test(&mapped),
            None => false,
        }
    }
}

/// Predicate that is true when the mapper yields a value.
#[derive(Clone, Copy, Debug)]
pub struct IsPresent<F>(F);

impl<T: ?Sized, R, F> Predicate<T> for IsPresent<F>
where
    F: Mapper<T, Output = Option<R>>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.apply(value).is_some()
    }
}

/// An immutable holder of a mapping from `&T` to `Option<R>`.
///
/// Like [`Mapping`], but refinements only touch present values and the
/// resulting predicates are `false` on absence.
pub struct OptionalMapping<T: ?Sized, F> {
    mapper: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> OptionalMapping<T, F> {
    fn new(mapper: F) -> Self {
        Self {
            mapper,
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F: Clone> Clone for OptionalMapping<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.mapper.clone())
    }
}

impl<T: ?Sized, F> fmt::Debug for OptionalMapping<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalMapping")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, R, F> OptionalMapping<T, F>
where
    F: Mapper<T, Output = Option<R>>,
{
    /// Map the present value; absence is carried through untouched.
    pub fn map<U, G>(self, mapper: G) -> OptionalMapping<T, MapSome<F, G>>
    where
        G: Fn(R) -> U,
    {
        OptionalMapping::new(MapSome(self.mapper, mapper))
    }

    /// Chain a further mapping that may itself yield nothing.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let port = of_nullable(|s: &str| s.split_once(':').map(|(_, p)| p.to_string()))
    ///     .and_then(|p| p.parse::<u16>().ok())
    ///     .gt(1024);
    /// assert!(port.test("localhost:8080"));
    /// assert!(!port.test("localhost:http"));
    /// assert!(!port.test("localhost"));
    /// ```
    pub fn and_then<U, G>(self, mapper: G) -> OptionalMapping<T, FlatMapSome<F, G>>
    where
        G: Fn(R) -> Option<U>,
    {
        OptionalMapping::new(FlatMapSome(self.mapper, mapper))
    }

    /// Turn the wrapper into a predicate over `T`.
    ///
    /// The predicate is `false` when the mapper yields `None`; `tester` is
    /// only invoked on present values.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let first_is_upper = of_nullable(|s: &str| s.chars().next())
    ///     .check(|c: &char| c.is_uppercase());
    /// assert!(first_is_upper.test("Rust"));
    /// assert!(!first_is_upper.test("rust"));
    /// assert!(!first_is_upper.test(""));
    /// ```
    pub fn check<P>(self, tester: P) -> CheckedSome<F, P>
    where
        P: Predicate<R>,
    {
        CheckedSome {
            mapper: self.mapper,
            tester,
        }
    }

    /// Predicate that is true when the mapper yields a value.
    pub fn is_present(self) -> IsPresent<F> {
        IsPresent(self.mapper)
    }

    /// Predicate that is true when the mapper yields nothing.
    pub fn is_absent(self) -> Not<IsPresent<F>> {
        Not(IsPresent(self.mapper))
    }

    /// Replace absence with `fallback`, leaving a plain [`Mapping`].
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// let retries = of_nullable(|s: &str| s.parse::<u32>().ok()).unwrap_or(3);
    /// assert_eq!(retries.apply("5"), 5);
    /// assert_eq!(retries.apply("many"), 3);
    /// ```
    pub fn unwrap_or(self, fallback: R) -> Mapping<T, UnwrapOr<F, R>>
    where
        R: Clone,
    {
        Mapping::new(UnwrapOr {
            mapper: self.mapper,
            fallback,
        })
    }

    /// Apply the held mapping directly.
    pub fn apply(&self, value: &T) -> Option<R> {
        self.mapper.apply(value)
    }
}

impl<T: ?Sized, R: PartialEq, F> OptionalMapping<T, F>
where
    F: Mapper<T, Output = Option<R>>,
{
    /// Mapped value is present and equals `value`.
    pub fn eq(self, value: R) -> CheckedSome<F, Eq<R>> {
        self.check(eq(value))
    }

    /// Mapped value is present and differs from `value`.
    pub fn ne(self, value: R) -> CheckedSome<F, Ne<R>> {
        self.check(ne(value))
    }
}

impl<T: ?Sized, R: PartialOrd, F> OptionalMapping<T, F>
where
    F: Mapper<T, Output = Option<R>>,
{
    /// Mapped value is present and greater than `value`.
    pub fn gt(self, value: R) -> CheckedSome<F, Gt<R>> {
        self.check(gt(value))
    }

    /// Mapped value is present and at least `value`.
    pub fn ge(self, value: R) -> CheckedSome<F, Ge<R>> {
        self.check(ge(value))
    }

    /// Mapped value is present and less than `value`.
    pub fn lt(self, value: R) -> CheckedSome<F, Lt<R>> {
        self.check(lt(value))
    }

    /// Mapped value is present and at most `value`.
    pub fn le(self, value: R) -> CheckedSome<F, Le<R>> {
        self.check(le(value))
    }

    /// Mapped value is present and lies in `[min, max]`.
    pub fn between(self, min: R, max: R) -> CheckedSome<F, Between<R>> {
        self.check(between(min, max))
    }
}

/// Start a mapping predicate from a mapper that may yield nothing.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// let has_long_tail = of_nullable(|v: &Vec<i32>| v.last().copied()).map(|n| n * 10).ge(100);
/// assert!(has_long_tail.test(&vec![1, 10]));
/// assert!(!has_long_tail.test(&vec![]));
/// ```
pub fn of_nullable<T, R, F>(mapper: F) -> OptionalMapping<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Option<R>,
{
    OptionalMapping::new(mapper)
}

/// Start a nullable mapping predicate whose present value is ordered.
pub fn of_nullable_ord<T, R, F>(mapper: F) -> OptionalMapping<T, F>
where
    T: ?Sized,
    R: PartialOrd,
    F: Fn(&T) -> Option<R>,
{
    OptionalMapping::new(mapper)
}
