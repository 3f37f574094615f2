//! Property coverage for the engine's algebraic guarantees: purity,
//! emptiness ⇔ validity, and aggregate ordering.

use crate::model::Policy;
use crate::{evaluate, PasswordPolicy};
use passguard_types::{ErrorStrings, DEFAULT_SPECIAL_CHARS};
use proptest::prelude::*;

fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        proptest::option::of(0usize..12),
        proptest::option::of(0usize..24),
        proptest::option::of(0usize..4),
        proptest::option::of(0usize..4),
        proptest::option::of(0usize..4),
        "[~!@#$%^&*()=_+-]{0,8}",
        proptest::option::of(0usize..3),
        proptest::collection::vec("[a-c0-2]{1,3}", 0..3),
        proptest::collection::vec("[a-c0-2]{1,3}", 0..3),
    )
        .prop_map(
            |(
                length_min,
                length_max,
                char_digit_min,
                char_upper_min,
                char_lower_min,
                char_special,
                char_special_min,
                must_contain,
                must_not_contain,
            )| Policy {
                length_min,
                length_max,
                char_digit_min,
                char_upper_min,
                char_lower_min,
                char_special,
                char_special_min,
                must_contain,
                must_not_contain,
                ..Policy::default()
            },
        )
}

proptest! {
    #[test]
    fn evaluation_is_pure_and_idempotent(
        policy in arb_policy(),
        password in ".{0,24}",
    ) {
        let strings = ErrorStrings::default();
        let first = evaluate(&password, &policy, &strings);
        let second = evaluate(&password, &policy, &strings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn emptiness_equals_validity(
        policy in arb_policy(),
        password in ".{0,24}",
    ) {
        let pp = PasswordPolicy::with_policy(policy, [], "p");
        prop_assert_eq!(pp.is_valid(&password, "p"), pp.validate(&password, "p").is_empty());
    }

    #[test]
    fn all_is_the_flat_concat_of_entries_in_kind_order(
        policy in arb_policy(),
        password in ".{0,24}",
    ) {
        let report = evaluate(&password, &policy, &ErrorStrings::default());
        let flat: Vec<&str> = report
            .kinds()
            .flat_map(|kind| report.get(kind).into_iter().flat_map(|set| set.iter()))
            .collect();
        let all: Vec<&str> = report.all().iter().map(String::as_str).collect();
        prop_assert_eq!(flat, all);
    }

    #[test]
    fn zero_minimums_never_fail(password in ".{0,16}") {
        let policy = Policy {
            length_min: Some(0),
            length_max: None,
            char_digit_min: Some(0),
            char_upper_min: Some(0),
            char_lower_min: Some(0),
            char_special: DEFAULT_SPECIAL_CHARS.to_string(),
            char_special_min: Some(0),
            ..Policy::default()
        };
        prop_assert!(evaluate(&password, &policy, &ErrorStrings::default()).is_empty());
    }

    #[test]
    fn unknown_policy_always_yields_the_sentinel(password in ".{0,16}") {
        let pp = PasswordPolicy::new();
        let report = pp.validate(&password, "never-registered");
        prop_assert_eq!(report.all(), &["Missing defined policies".to_string()]);
    }
}
