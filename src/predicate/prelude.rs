//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use predicate_combinators::predicate::prelude::*;
//!
//! let in_range = (|x: &i32| *x >= 0).and(|x: &i32| *x <= 150);
//! assert!(in_range.test(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

pub use super::boxed::BoxedPredicate;
pub use super::constant::{always, constant, never, Constant};
pub use super::error::{Combinator, MissingOperand};

#[cfg(feature = "tracing")]
pub use super::tracing::PredicateTracingExt;
