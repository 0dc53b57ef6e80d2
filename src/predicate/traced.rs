//! Tracing support for predicates.
//!
//! This module provides the `Traced` wrapper and the `traced` method for
//! emitting an event every time a predicate is evaluated. Only compiled with the
//! `tracing` feature.

use super::combinators::Predicate;

/// A predicate that logs each evaluation.
///
/// Created by [`PredicateTracingExt::traced`].
#[derive(Clone, Copy, Debug)]
pub struct Traced<P> {
    pub(crate) inner: P,
    pub(crate) name: &'static str,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Traced<P> {
    fn test(&self, value: &T) -> bool {
        let outcome = self.inner.test(value);
        tracing::debug!(predicate = self.name, outcome, "predicate evaluated");
        outcome
    }
}

/// Extension trait for adding tracing to predicates.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait PredicateTracingExt<T: ?Sized>: Predicate<T> + Sized {
    /// Wrap this predicate so each evaluation emits a `debug` event carrying
    /// `name` and the outcome. The input value itself is not logged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use lambdax::predicate::*;
    /// use lambdax::predicate::traced::PredicateTracingExt;
    ///
    /// let adult = of(|age: &u32| *age).ge(18).traced("adult");
    /// assert!(adult.test(&30)); // predicate="adult" outcome=true
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateTracingExt<T> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{and, gt, lie};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_traced_returns_inner_outcome() {
        let p = gt(3).traced("above_three");
        assert!(p.test(&4));
        assert!(!p.test(&2));
    }

    #[traced_test]
    #[test]
    fn test_traced_logs_name_and_outcome() {
        let p = gt(3).traced("above_three");
        p.test(&10);

        assert!(logs_contain("predicate evaluated"));
        assert!(logs_contain("above_three"));
        assert!(logs_contain("outcome=true"));
    }

    #[traced_test]
    #[test]
    fn test_short_circuit_skips_inner_event() {
        let p = and(lie(), gt(0).traced("skipped"));
        assert!(!p.test(&1));
        assert!(!logs_contain("skipped"));
    }
}
