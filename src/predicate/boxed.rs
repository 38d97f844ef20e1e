//! BoxedPredicate for type erasure.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use super::combinators::{Predicate, PredicateExt};

/// A type-erased predicate for use in collections, match arms, or
/// predicates assembled at runtime.
///
/// Boxed predicates also support the `&`, `|` and `!` operators, which follow
/// the same evaluation order as [`PredicateExt::and`], [`PredicateExt::or`]
/// and [`PredicateExt::negate`].
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// fn rule(strict: bool) -> BoxedPredicate<'static, i32> {
///     if strict {
///         (|x: &i32| *x > 0).and(|x: &i32| *x < 10).boxed()
///     } else {
///         (|x: &i32| *x > 0).boxed()
///     }
/// }
///
/// assert!(!rule(true).test(&50));
/// assert!(rule(false).test(&50));
///
/// let either = rule(true) | !rule(false);
/// assert!(either.test(&-1));
/// ```
pub struct BoxedPredicate<'a, T: ?Sized> {
    inner: Box<dyn Predicate<T> + 'a>,
}

impl<'a, T: ?Sized> BoxedPredicate<'a, T> {
    /// Box a predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'a,
    {
        Self {
            inner: Box::new(predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedPredicate").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Predicate<T> for BoxedPredicate<'_, T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.inner.test(value)
    }
}

impl<'a, T: ?Sized + 'a> BitAnd for BoxedPredicate<'a, T> {
    type Output = BoxedPredicate<'a, T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs).boxed()
    }
}

impl<'a, T: ?Sized + 'a> BitOr for BoxedPredicate<'a, T> {
    type Output = BoxedPredicate<'a, T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs).boxed()
    }
}

impl<'a, T: ?Sized + 'a> Not for BoxedPredicate<'a, T> {
    type Output = BoxedPredicate<'a, T>;

    fn not(self) -> Self::Output {
        self.negate().boxed()
    }
}
