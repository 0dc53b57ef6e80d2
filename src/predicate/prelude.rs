//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate traits, functions
//! and macros.
//!
//! # Example
//!
//! ```rust
//! use lambdax::predicate::prelude::*;
//!
//! let p = and!(gt(0), lt(150), of(|n: &i32| n % 10).ne(0));
//! assert!(p.test(&25));
//! assert!(!p.test(&30));
//! ```

// Core traits
pub use super::combinators::{Predicate, PredicateExt};

#[cfg(feature = "tracing")]
pub use super::traced::PredicateTracingExt;

// Logical combinators
pub use super::combinators::{and, nand, nor, or, xnor, xor};
pub use super::constant::{lie, not, truth};
pub use super::variadic::{and_all, nand_all, nor_all, or_all, xnor_all, xor_all};

// Comparisons
pub use super::compare::{between, eq, ge, gt, le, lt, ne};

// Mapping predicates
pub use super::mapping::{of, of_ord};
pub use super::optional::{of_nullable, of_nullable_ord};

// N-ary macros
pub use crate::{and, nand, nor, or, xnor, xor};
