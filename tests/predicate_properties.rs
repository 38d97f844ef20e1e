//! Property-based tests for the logical combinators

use predicate_combinators::prelude::*;
use predicate_combinators::testing::Probe;
use proptest::prelude::*;

fn threshold(limit: i32) -> impl Predicate<i32> + Copy {
    move |x: &i32| *x > limit
}

fn divisible_by(n: i32) -> impl Predicate<i32> + Copy {
    move |x: &i32| x % n == 0
}

proptest! {
    #[test]
    fn prop_and_is_logical_and(a in any::<i32>(), n in 1i32..20, x in any::<i32>()) {
        let (p, q) = (threshold(a), divisible_by(n));
        prop_assert_eq!(p.and(q).test(&x), p.test(&x) && q.test(&x));
    }

    #[test]
    fn prop_or_is_logical_or(a in any::<i32>(), n in 1i32..20, x in any::<i32>()) {
        let (p, q) = (threshold(a), divisible_by(n));
        prop_assert_eq!(p.or(q).test(&x), p.test(&x) || q.test(&x));
    }

    #[test]
    fn prop_negate_is_complement(a in any::<i32>(), x in any::<i32>()) {
        let p = threshold(a);
        prop_assert_eq!(p.negate().test(&x), !p.test(&x));
    }

    #[test]
    fn prop_double_negation(a in any::<i32>(), x in any::<i32>()) {
        let p = threshold(a);
        prop_assert_eq!(p.negate().negate().test(&x), p.test(&x));
    }

    #[test]
    fn prop_de_morgan(a in any::<i32>(), n in 1i32..20, x in any::<i32>()) {
        let (p, q) = (threshold(a), divisible_by(n));
        prop_assert_eq!(
            p.and(q).negate().test(&x),
            p.negate().or(q.negate()).test(&x)
        );
    }

    #[test]
    fn prop_and_skips_rhs_when_lhs_false(lhs in any::<bool>(), rhs in any::<bool>()) {
        let right = Probe::new(constant::<()>(rhs));
        let seen = right.handle();

        let result = constant(lhs).and(right).test(&());
        prop_assert_eq!(result, lhs && rhs);
        prop_assert_eq!(seen.invoked(), lhs);
    }

    #[test]
    fn prop_or_skips_rhs_when_lhs_true(lhs in any::<bool>(), rhs in any::<bool>()) {
        let right = Probe::new(constant::<()>(rhs));
        let seen = right.handle();

        let result = constant(lhs).or(right).test(&());
        prop_assert_eq!(result, lhs || rhs);
        prop_assert_eq!(seen.invoked(), !lhs);
    }

    #[test]
    fn prop_lhs_always_evaluated_once(lhs in any::<bool>(), rhs in any::<bool>()) {
        let left = Probe::new(constant::<()>(lhs));
        let seen = left.handle();

        let _ = left.and(constant(rhs)).test(&());
        prop_assert_eq!(seen.calls(), 1);
    }

    #[test]
    fn prop_missing_operand_never_evaluates(lhs in any::<bool>(), use_or in any::<bool>()) {
        let left = Probe::new(constant::<()>(lhs));
        let seen = left.handle();
        let missing: Option<Constant<()>> = None;

        let err = if use_or {
            left.try_or(missing).map(|_| ()).unwrap_err()
        } else {
            left.try_and(missing).map(|_| ()).unwrap_err()
        };

        let expected = if use_or { Combinator::Or } else { Combinator::And };
        prop_assert_eq!(err.combinator(), expected);
        prop_assert!(!seen.invoked());
    }

    #[test]
    fn prop_all_of_matches_fold(answers in prop::array::uniform4(any::<bool>())) {
        let p = all_of(answers.map(constant::<u8>));
        prop_assert_eq!(p.test(&0), answers.iter().all(|a| *a));

        let p = any_of(answers.map(constant::<u8>));
        prop_assert_eq!(p.test(&0), answers.iter().any(|a| *a));

        let p = none_of(answers.map(constant::<u8>));
        prop_assert_eq!(p.test(&0), !answers.iter().any(|a| *a));
    }
}
