//! Property-based tests for the similarity metrics.

use proptest::prelude::*;

use muster_fuzzy::{jaro, jaro_winkler, matching_characters};

proptest! {
    #[test]
    fn jaro_stays_in_unit_interval(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let score = jaro(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn jaro_winkler_stays_in_unit_interval(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let score = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn identical_strings_score_one(a in "[a-z]{1,12}") {
        prop_assert_eq!(jaro(&a, &a), 1.0);
        prop_assert_eq!(jaro_winkler(&a, &a), 1.0);
    }

    #[test]
    fn empty_side_scores_zero(a in "[a-z]{1,12}") {
        prop_assert_eq!(jaro(&a, ""), 0.0);
        prop_assert_eq!(jaro("", &a), 0.0);
    }

    #[test]
    fn matches_never_exceed_either_length(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let m = matching_characters(&a, &b).chars().count();
        prop_assert!(m <= a.chars().count());
        prop_assert!(m <= b.chars().count());
    }

    #[test]
    fn case_does_not_affect_winkler(a in "[a-zA-Z]{0,12}", b in "[a-zA-Z]{0,12}") {
        prop_assert_eq!(
            jaro_winkler(&a, &b),
            jaro_winkler(&a.to_lowercase(), &b.to_uppercase())
        );
    }
}
