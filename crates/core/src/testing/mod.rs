//! Property-based testing generators for `Outcome` values
//!
//! Enabled for this crate's own tests and, through the `testing` feature, for
//! downstream crates that want the same strategies.

use crate::outcome::Outcome;
use proptest::prelude::*;

/// Opaque failure payload for property tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault(pub u8);

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Success or failure with roughly even odds
    pub fn outcome<T: std::fmt::Debug + Clone + 'static>(
        value: impl Strategy<Value = T> + 'static,
    ) -> impl Strategy<Value = Outcome<T, Fault>> {
        prop_oneof![
            value.prop_map(Outcome::Success),
            any::<u8>().prop_map(|code| Outcome::Failure(Fault(code))),
        ]
    }

    /// Lists of mixed outcomes
    pub fn outcome_list<T: std::fmt::Debug + Clone + 'static>(
        value: impl Strategy<Value = T> + 'static,
    ) -> impl Strategy<Value = Vec<Outcome<T, Fault>>> {
        vec(outcome(value), 0..32)
    }

    /// Lists made only of successes
    pub fn success_list<T: std::fmt::Debug + Clone + 'static>(
        value: impl Strategy<Value = T> + 'static,
    ) -> impl Strategy<Value = Vec<Outcome<T, Fault>>> {
        vec(value.prop_map(Outcome::Success), 0..32)
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use crate::outcome::sequence;
    use proptest::proptest;

    proptest! {
        /// `value` and `error` are never both present
        #[test]
        fn projections_are_exclusive(o in outcome(any::<i32>())) {
            let has_value = o.as_value().is_some();
            let has_error = o.as_error().is_some();
            prop_assert!(has_value != has_error);
            prop_assert_eq!(has_value, o.is_success());
        }

        /// `sequence` agrees with a hand-written scan for the first failure
        #[test]
        fn sequence_matches_first_failure_scan(items in outcome_list(any::<i16>())) {
            let first_failure = items.iter().find_map(|o| o.as_error().cloned());
            let collapsed = sequence(items.clone());

            match first_failure {
                Some(fault) => prop_assert_eq!(collapsed, Outcome::Failure(fault)),
                None => {
                    let values: Vec<i16> = items.into_iter().filter_map(Outcome::value).collect();
                    prop_assert_eq!(collapsed, Outcome::Success(values));
                }
            }
        }

        /// All-success input keeps length and order
        #[test]
        fn sequence_preserves_order(items in success_list(any::<u32>())) {
            let expected: Vec<u32> = items.iter().filter_map(|o| o.as_value().copied()).collect();
            let collapsed = sequence(items).value();
            prop_assert_eq!(collapsed, Some(expected));
        }
    }
}
