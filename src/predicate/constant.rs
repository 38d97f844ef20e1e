//! Constant predicates

use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;

/// A predicate that ignores its input and returns a fixed answer.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// assert!(always().test(&1));
/// assert!(!never().test(&1));
/// assert!(constant(true).and(never()).negate().test(&1));
/// ```
pub struct Constant<T: ?Sized> {
    value: bool,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Constant<T> {
    /// The answer this predicate gives for every input.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl<T: ?Sized> Clone for Constant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Constant<T> {}

impl<T: ?Sized> fmt::Debug for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constant").field(&self.value).finish()
    }
}

impl<T: ?Sized> PartialEq for Constant<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: ?Sized> Eq for Constant<T> {}

impl<T: ?Sized> Predicate<T> for Constant<T> {
    #[inline]
    fn test(&self, _value: &T) -> bool {
        self.value
    }
}

/// Create a predicate that always returns `value`.
pub fn constant<T: ?Sized>(value: bool) -> Constant<T> {
    Constant {
        value,
        _marker: PhantomData,
    }
}

/// Create a predicate that is always true.
pub fn always<T: ?Sized>() -> Constant<T> {
    constant(true)
}

/// Create a predicate that is always false.
pub fn never<T: ?Sized>() -> Constant<T> {
    constant(false)
}
