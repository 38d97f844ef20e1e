//! Tracing support for predicates.
//!
//! This module provides the `Traced` combinator and `traced` method for
//! emitting an event every time a predicate is evaluated. Feature-gated
//! behind `#[cfg(feature = "tracing")]`.

use super::combinators::Predicate;

/// A predicate that reports each evaluation as a tracing event.
///
/// Created by [`PredicateTracingExt::traced`].
#[derive(Clone, Copy, Debug)]
pub struct Traced<P> {
    inner: P,
    name: &'static str,
}

impl<P> Traced<P> {
    /// The name reported in the `predicate` field.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Traced<P> {
    fn test(&self, value: &T) -> bool {
        let result = self.inner.test(value);
        tracing::debug!(predicate = self.name, result, "predicate evaluated");
        result
    }
}

/// Extension trait for adding tracing to predicates.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait PredicateTracingExt<T: ?Sized>: Predicate<T> + Sized {
    /// Emit a `debug` event named after `name` whenever this predicate runs.
    ///
    /// Nothing is emitted for a predicate that is skipped by
    /// short-circuiting, so tracing each operand shows exactly which ones
    /// were evaluated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_combinators::prelude::*;
    /// use predicate_combinators::predicate::tracing::PredicateTracingExt;
    ///
    /// let p = (|x: &i32| *x > 0)
    ///     .traced("positive")
    ///     .and((|x: &i32| *x < 100).traced("below_100"));
    /// assert!(p.test(&50));
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateTracingExt<T> for P {}
