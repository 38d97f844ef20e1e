//! Error types for predicate composition.

use std::fmt;

/// The binary combinator a [`MissingOperand`] was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Short-circuiting logical AND.
    And,
    /// Short-circuiting logical OR.
    Or,
}

impl Combinator {
    /// The method name of the combinator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a binary combinator is given an absent right-hand
/// operand.
///
/// Raised at composition time, before any predicate has been evaluated.
///
/// # Examples
///
/// ```rust
/// use predicate_combinators::prelude::*;
///
/// let rhs: Option<BoxedPredicate<'static, str>> = None;
/// let lhs = (|s: &str| !s.is_empty()).boxed();
///
/// match lhs.try_or(rhs) {
///     Err(err) => {
///         assert_eq!(err.combinator(), Combinator::Or);
///         assert_eq!(err.to_string(), "missing right-hand operand for `or` combinator");
///     }
///     Ok(_) => panic!("Expected MissingOperand"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingOperand {
    combinator: Combinator,
}

impl MissingOperand {
    /// Create a new MissingOperand error.
    pub fn new(combinator: Combinator) -> Self {
        Self { combinator }
    }

    /// The combinator that rejected the operand.
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }
}

impl fmt::Display for MissingOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing right-hand operand for `{}` combinator",
            self.combinator
        )
    }
}

impl std::error::Error for MissingOperand {}
