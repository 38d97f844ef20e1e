//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the
//! short-circuiting combinators used to compose predicates.

use super::boxed::BoxedPredicate;
use super::error::{Combinator, MissingOperand};

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `negate`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// let is_valid_age = (|x: &i32| *x >= 0).and(|x: &i32| *x <= 150);
/// assert!(is_valid_age.test(&25));
/// assert!(!is_valid_age.test(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn test(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// Composition never evaluates either operand; evaluation only happens when
/// `test` is called on the result.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 100).negate();
/// assert!(p.test(&-5));
/// assert!(!p.test(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The receiver is evaluated first. `other` is evaluated only when the
    /// receiver returns `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_combinators::prelude::*;
    ///
    /// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
    /// assert!(p.test(&50));
    /// assert!(!p.test(&0));
    /// assert!(!p.test(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// The receiver is evaluated first. `other` is evaluated only when the
    /// receiver returns `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_combinators::prelude::*;
    ///
    /// let p = (|x: &i32| *x < 0).or(|x: &i32| *x > 100);
    /// assert!(p.test(&-5));
    /// assert!(p.test(&150));
    /// assert!(!p.test(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_combinators::prelude::*;
    ///
    /// let is_none = (|x: &Option<i32>| x.is_some()).negate();
    /// assert!(is_none.test(&None));
    /// assert!(!is_none.test(&Some(1)));
    /// ```
    fn negate(self) -> Not<Self> {
        Not(self)
    }

    /// Combine with AND logic when the right-hand operand may be absent.
    ///
    /// Fails with [`MissingOperand`] as soon as `other` is `None`. Nothing is
    /// evaluated either way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_combinators::prelude::*;
    ///
    /// let missing: Option<Constant<i32>> = None;
    /// let err = always().try_and(missing).unwrap_err();
    /// assert_eq!(err.combinator(), Combinator::And);
    ///
    /// let p = always().try_and(Some(never())).unwrap();
    /// assert!(!p.test(&7));
    /// ```
    fn try_and<P: Predicate<T>>(self, other: Option<P>) -> Result<And<Self, P>, MissingOperand> {
        let other = other.ok_or(MissingOperand::new(Combinator::And))?;
        Ok(self.and(other))
    }

    /// Combine with OR logic when the right-hand operand may be absent.
    ///
    /// Fails with [`MissingOperand`] as soon as `other` is `None`.
    fn try_or<P: Predicate<T>>(self, other: Option<P>) -> Result<Or<Self, P>, MissingOperand> {
        let other = other.ok_or(MissingOperand::new(Combinator::Or))?;
        Ok(self.or(other))
    }

    /// Erase the concrete predicate type.
    fn boxed<'a>(self) -> BoxedPredicate<'a, T>
    where
        Self: 'a,
    {
        BoxedPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

// Send + Sync are auto-derived when P1 and P2 are Send + Sync

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

/// Check if all predicates are satisfied.
///
/// Evaluation stops at the first predicate that returns `false`.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.test(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// Requires homogeneous predicate types; for mixed predicates chain
/// `.and()` or box them first.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// let p = all_of([always(), always(), never()]);
/// assert!(!p.test(&1));
/// assert!(all_of::<Constant<i32>, 0>([]).test(&1));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate is satisfied.
///
/// Evaluation stops at the first predicate that returns `true`.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.test(value))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// let p = any_of([never(), always()]);
/// assert!(p.test(&"x"));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.test(value))
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// Equivalent to `any_of(...).negate()`.
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
