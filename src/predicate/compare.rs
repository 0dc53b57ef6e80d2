//! Comparison predicates
//!
//! These back the comparison helpers of the ordered mapping wrappers, and can
//! be used on their own as well.

use super::combinators::Predicate;

macro_rules! comparison {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $bound:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<T>(pub T);

        impl<T: $bound> Predicate<T> for $name<T> {
            #[inline]
            fn test(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] predicate against `value`.")]
        pub fn $ctor<T: $bound>(value: T) -> $name<T> {
            $name(value)
        }
    };
}

comparison!(
    /// Predicate for equality.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// assert!(eq(5).test(&5));
    /// assert!(!eq(5).test(&4));
    /// ```
    Eq, eq, PartialEq, ==
);

comparison!(
    /// Predicate for inequality.
    Ne, ne, PartialEq, !=
);

comparison!(
    /// Predicate for strictly greater than.
    ///
    /// ```rust
    /// use lambdax::predicate::*;
    ///
    /// assert!(gt(5).test(&6));
    /// assert!(!gt(5).test(&5));
    /// ```
    Gt, gt, PartialOrd, >
);

comparison!(
    /// Predicate for greater than or equal.
    Ge, ge, PartialOrd, >=
);

comparison!(
    /// Predicate for strictly less than.
    Lt, lt, PartialOrd, <
);

comparison!(
    /// Predicate for less than or equal.
    Le, le, PartialOrd, <=
);

/// Predicate for an inclusive range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> Predicate<T> for Between<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if a value lies in `[min, max]`.
///
/// An empty range (`min > max`) rejects everything.
///
/// # Example
///
/// ```rust
/// use lambdax::predicate::*;
///
/// assert!(between(1, 10).test(&1));
/// assert!(between(1, 10).test(&10));
/// assert!(!between(1, 10).test(&11));
/// ```
pub fn between<T: PartialOrd>(min: T, max: T) -> Between<T> {
    Between { min, max }
}
