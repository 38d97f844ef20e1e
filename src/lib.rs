//! # predicate-combinators
//!
//! Composable boolean predicates with short-circuiting `and`, `or` and
//! `negate` combinators.
//!
//! ## Quick Example
//!
//! ```rust
//! use predicate_combinators::prelude::*;
//!
//! let is_even = |x: &i32| x % 2 == 0;
//! let is_small = |x: &i32| x.abs() < 100;
//!
//! let rule = is_even.and(is_small).or(|x: &i32| *x == 101);
//! assert!(rule.test(&42));
//! assert!(rule.test(&101));
//! assert!(!rule.test(&7));
//!
//! let odd = is_even.negate();
//! assert!(odd.test(&7));
//! ```
//!
//! ## Absent operands
//!
//! `try_and` and `try_or` accept an optional right-hand side and fail with
//! [`MissingOperand`] at composition time when it is missing:
//!
//! ```rust
//! use predicate_combinators::prelude::*;
//!
//! let rhs: Option<Constant<i32>> = None;
//! let err = always().try_or(rhs).unwrap_err();
//! assert_eq!(err.combinator(), Combinator::Or);
//! ```
//!
//! ## Features
//!
//! - `tracing`: `predicate::tracing` module for tracing predicate evaluation
//! - `proptest`: `Arbitrary` implementation for [`Constant`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;
pub mod testing;

// Re-exports
pub use predicate::{
    BoxedPredicate, Combinator, Constant, MissingOperand, Predicate, PredicateExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
}
