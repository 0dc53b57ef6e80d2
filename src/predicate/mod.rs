//! Predicate combinators and mapping predicates
//!
//! This module provides the `Predicate` trait, the logical connectives over
//! predicates (`and`, `or`, `xor`, `nand`, `nor`, `xnor`, `not`) in binary and
//! n-ary form, constant predicates, comparison predicates, and mapping
//! predicates that transform the input before testing it.
//!
//! # Example
//!
//! ```rust
//! use lambdax::predicate::*;
//!
//! // Binary connectives
//! let small = gt(0).and(lt(10));
//! assert!(small.test(&5));
//! assert!(!small.test(&10));
//!
//! // N-ary connectives
//! let odd_count = xor_all(gt(0), gt(5), [gt(10)]);
//! assert!(odd_count.test(&3));
//! assert!(!odd_count.test(&7));
//!
//! // Map, then test
//! let long_word = of(|s: &str| s.len()).map(|n| n * 2).gt(5);
//! assert!(long_word.test("abc"));
//! ```
//!
//! # Short-circuiting
//!
//! `and` and `nand` skip their second operand when the first is `false`, `or`
//! and `nor` when it is `true`. `xor` and `xnor` always evaluate both. N-ary
//! forms are left folds of these binary steps. Operand panics propagate
//! unchanged.

mod combinators;
mod compare;
mod constant;
mod mapping;
mod optional;
mod variadic;

pub mod prelude;
#[cfg(feature = "tracing")]
pub mod traced;

// Re-export core traits
pub use combinators::{Predicate, PredicateExt};

// Re-export binary combinators
pub use combinators::{
    and, nand, nor, or, xnor, xor, And, BoxedPredicate, Nand, Nor, Not, Or, Xnor, Xor,
};

// Re-export n-ary combinators
pub use variadic::{
    and_all, nand_all, nor_all, or_all, xnor_all, xor_all, AndAll, NandAll, NorAll, OrAll,
    XnorAll, XorAll,
};

// Re-export constant predicates
pub use constant::{lie, not, truth, Lie, Truth};

// Re-export comparison predicates
pub use compare::{between, eq, ge, gt, le, lt, ne, Between, Eq, Ge, Gt, Le, Lt, Ne};

// Re-export mapping predicates
pub use mapping::{of, of_ord, AndThen, Checked, Mapper, Mapping};
pub use optional::{
    of_nullable, of_nullable_ord, CheckedSome, FlatMapSome, IsPresent, MapSome, OptionalMapping,
    UnwrapOr,
};
