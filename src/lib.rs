//! # LambdaX
//!
//! Small, composable lambdas for functional pipelines.
//!
//! - [`predicate`]: logical connectives over predicates (`and`, `or`, `xor`,
//!   `nand`, `nor`, `xnor`, `not`) in binary and n-ary form, constant and
//!   comparison predicates, and mapping predicates that transform the input
//!   before testing it.
//! - [`deque`]: factories that capture an item and return a predicate or a
//!   consumer performing one operation on a double-ended queue.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::collections::VecDeque;
//! use lambdax::deque::{self, Mutation};
//! use lambdax::predicate::{gt, lt, of, Predicate};
//!
//! // Map, refine, then test
//! let long_name = of(|s: &str| s.len()).map(|n| n * 2).check(gt(5));
//! assert!(long_name.test("abc"));
//!
//! // Three checks, evaluated left to right, stopping at the first failure
//! let small_even = lambdax::and!(gt(0), lt(10), |x: &i32| x % 2 == 0);
//! assert!(small_even.test(&4));
//! assert!(!small_even.test(&5));
//!
//! // One operation on a deque
//! let mut queue = VecDeque::from([1, 2, 2, 3]);
//! assert!(deque::remove_first_occurrence(2).apply(&mut queue));
//! assert_eq!(queue, [1, 2, 3]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: `predicate::traced` wraps predicates so every evaluation
//!   emits a `tracing` event.
//! - `serde`: `Serialize`/`Deserialize` for [`deque::BoundedDeque`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deque;
pub mod predicate;

// Re-exports
pub use deque::{BoundedDeque, CapacityError, Deque, Mutation};
pub use predicate::{Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deque::{BoundedDeque, CapacityError, Deque, Mutation};
    pub use crate::predicate::prelude::*;
}
