//! Testing utilities for predicates
//!
//! This module provides helpers for observing how composed predicates are
//! evaluated: a [`Probe`] wrapper that counts invocations, assertion macros
//! built on it, and property-based testing support.
//!
//! # Examples
//!
//! ```rust
//! use predicate_combinators::prelude::*;
//! use predicate_combinators::testing::Probe;
//! use predicate_combinators::{assert_invoked, assert_not_invoked};
//!
//! let lhs = Probe::new(never::<i32>());
//! let rhs = Probe::new(always::<i32>());
//! let (lhs_seen, rhs_seen) = (lhs.handle(), rhs.handle());
//!
//! assert!(!lhs.and(rhs).test(&1));
//! assert_invoked!(lhs_seen);
//! assert_not_invoked!(rhs_seen);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::predicate::Predicate;

/// A predicate wrapper that records every evaluation.
///
/// The counter is shared with any [`ProbeHandle`] obtained from
/// [`Probe::handle`], so invocations stay observable after the probe has been
/// moved into a combinator.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
/// use predicate_combinators::testing::Probe;
///
/// let probe = Probe::new(|x: &i32| *x > 0);
/// let handle = probe.handle();
///
/// let p = probe.negate();
/// assert_eq!(handle.calls(), 0);
///
/// assert!(p.test(&-1));
/// assert_eq!(handle.calls(), 1);
/// ```
#[derive(Debug)]
pub struct Probe<P> {
    inner: P,
    calls: Arc<AtomicUsize>,
}

impl<P> Probe<P> {
    /// Wrap a predicate.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a handle for observing this probe.
    pub fn handle(&self) -> ProbeHandle {
        ProbeHandle {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Probe<P> {
    fn test(&self, value: &T) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.test(value)
    }
}

/// Observer for a [`Probe`].
#[derive(Debug, Clone)]
pub struct ProbeHandle {
    calls: Arc<AtomicUsize>,
}

impl ProbeHandle {
    /// Number of times the probed predicate has been evaluated.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Whether the probed predicate has been evaluated at least once.
    pub fn invoked(&self) -> bool {
        self.calls() > 0
    }

    /// Forget all recorded evaluations.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

/// Reset every handle in `handles`.
///
/// Useful between scenarios that share the same set of probes.
pub fn reset_all(handles: &[&ProbeHandle]) {
    for handle in handles {
        handle.reset();
    }
}

/// Assert that a probed predicate has been evaluated.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
/// use predicate_combinators::{assert_invoked, testing::Probe};
///
/// let probe = Probe::new(always::<str>());
/// let handle = probe.handle();
/// probe.test("x");
/// assert_invoked!(handle);
/// ```
#[macro_export]
macro_rules! assert_invoked {
    ($handle:expr) => {
        if !$handle.invoked() {
            panic!("Expected predicate to be invoked, but it was not");
        }
    };
}

/// Assert that a probed predicate has not been evaluated.
///
/// # Example
///
/// ```rust
/// use predicate_combinators::prelude::*;
/// use predicate_combinators::{assert_not_invoked, testing::Probe};
///
/// let probe = Probe::new(always::<str>());
/// assert_not_invoked!(probe.handle());
/// ```
#[macro_export]
macro_rules! assert_not_invoked {
    ($handle:expr) => {{
        let calls = $handle.calls();
        if calls != 0 {
            panic!(
                "Expected predicate not to be invoked, but it ran {} time(s)",
                calls
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use crate::predicate::{constant, Constant};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T: ?Sized + 'static> Arbitrary for Constant<T> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<bool>().prop_map(constant).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{always, never, PredicateExt};

    #[test]
    fn probe_counts_calls() {
        let probe = Probe::new(always::<i32>());
        let handle = probe.handle();

        assert!(probe.test(&1));
        assert!(probe.test(&2));
        assert_eq!(handle.calls(), 2);
    }

    #[test]
    fn probe_passes_through_result() {
        let probe = Probe::new(never::<i32>());
        assert!(!probe.test(&1));
    }

    #[test]
    fn handle_reset() {
        let probe = Probe::new(always::<i32>());
        let handle = probe.handle();
        probe.test(&1);

        handle.reset();
        assert!(!handle.invoked());
    }

    #[test]
    fn reset_all_clears_every_handle() {
        let a = Probe::new(always::<()>());
        let b = Probe::new(never::<()>());
        let (ha, hb) = (a.handle(), b.handle());
        a.test(&());
        b.test(&());

        reset_all(&[&ha, &hb]);
        assert_eq!(ha.calls() + hb.calls(), 0);
    }

    #[test]
    fn handle_survives_composition() {
        let probe = Probe::new(always::<()>());
        let handle = probe.handle();
        let p = never().or(probe);

        assert!(p.test(&()));
        assert_invoked!(handle);
    }

    #[test]
    #[should_panic(expected = "Expected predicate to be invoked")]
    fn assert_invoked_panics_when_idle() {
        let probe = Probe::new(always::<()>());
        assert_invoked!(probe.handle());
    }

    #[test]
    #[should_panic(expected = "Expected predicate not to be invoked")]
    fn assert_not_invoked_panics_after_call() {
        let probe = Probe::new(always::<()>());
        probe.test(&());
        assert_not_invoked!(probe.handle());
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn constant_arbitrary_answers_its_value(p in any::<Constant<i32>>(), x in any::<i32>()) {
                prop_assert_eq!(p.test(&x), p.value());
            }
        }
    }
}
