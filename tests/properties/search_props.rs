use std::collections::HashSet;

use proptest::prelude::*;
use skillmap::search::{ResultKind, search};
use skillmap::fuzzy_score;

use crate::arb_employees;

proptest! {
    #[test]
    fn test_score_is_bounded(candidate in ".{0,32}", query in ".{0,8}") {
        let score = fuzzy_score(&candidate, &query);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_empty_query_scores_one(candidate in ".{1,32}") {
        prop_assert_eq!(fuzzy_score(&candidate, ""), 1.0);
    }

    #[test]
    fn test_empty_candidate_scores_zero(query in "[a-z]{1,8}") {
        prop_assert_eq!(fuzzy_score("", &query), 0.0);
    }

    #[test]
    fn test_substring_scores_one(prefix in "[a-z]{0,6}", needle in "[a-z]{1,6}", suffix in "[a-z]{0,6}") {
        let candidate = format!("{prefix}{needle}{suffix}");
        prop_assert_eq!(fuzzy_score(&candidate, &needle.to_uppercase()), 1.0);
    }

    #[test]
    fn test_blank_query_returns_nothing(employees in arb_employees(), blank in "[ \t]{0,4}") {
        prop_assert!(search(&employees, &blank).is_empty());
    }

    #[test]
    fn test_results_are_capped_sorted_and_distinct(employees in arb_employees(), query in "[a-z]{1,3}") {
        let results = search(&employees, &query);
        prop_assert!(results.len() <= 8);
        prop_assert!(results.windows(2).all(|w| w[0].score() >= w[1].score()));

        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        for result in &results {
            match result.kind() {
                ResultKind::Employee => {
                    prop_assert!(ids.insert(&result.employee().unwrap().id));
                }
                ResultKind::Skill => {
                    prop_assert!(labels.insert(result.display()));
                }
            }
            prop_assert!(result.score() > 0.3);
        }
    }
}
