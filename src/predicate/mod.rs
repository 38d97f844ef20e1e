//! Predicate combinators
//!
//! A predicate is a function from a value to `bool`. This module provides
//! composable predicates and the short-circuiting logical combinators used
//! to build complex rules from simple, reusable pieces.
//!
//! # Evaluation order
//!
//! - `a.and(b)` evaluates `a` first and only evaluates `b` when `a` is true
//! - `a.or(b)` evaluates `a` first and only evaluates `b` when `a` is false
//! - `a.negate()` evaluates `a` and inverts the answer
//!
//! Composing never evaluates anything. Predicates run only when `test` is
//! called on the composed result.
//!
//! # Example
//!
//! ```rust
//! use predicate_combinators::predicate::*;
//!
//! let non_blank = |s: &str| !s.trim().is_empty();
//! let short = |s: &str| s.len() <= 16;
//! let username = non_blank.and(short);
//!
//! assert!(username.test("john_doe"));
//! assert!(!username.test("   "));
//! ```
//!
//! # Absent operands
//!
//! When the right-hand operand is only known at runtime, `try_and` and
//! `try_or` take it as an `Option` and report [`MissingOperand`] if it is
//! absent:
//!
//! ```rust
//! use predicate_combinators::predicate::*;
//!
//! let extra: Option<BoxedPredicate<'static, str>> = None;
//! let result = (|s: &str| s.is_ascii()).try_and(extra);
//! assert!(result.is_err());
//! ```

mod boxed;
mod combinators;
mod constant;
mod error;

#[cfg(feature = "tracing")]
pub mod tracing;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

pub use boxed::BoxedPredicate;
pub use constant::{always, constant, never, Constant};
pub use error::{Combinator, MissingOperand};
