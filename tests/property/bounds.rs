//! Bounded search: exact within the bound, strictly over it otherwise.

use editwise::{damerau_levenshtein_with, levenshtein_with, CostModel};
use proptest::prelude::*;

use super::common::{chars, classic_costs, damerau_costs, int_seq, loose_damerau_costs, word};
use super::oracles::{oracle_damerau, oracle_levenshtein};

proptest! {
    #[test]
    fn classic_bound_is_sound(
        a in word(),
        b in word(),
        costs in classic_costs(),
        max_cost in 0u64..15,
    ) {
        let (a, b) = (chars(&a), chars(&b));
        let truth = oracle_levenshtein(&a, &b, &costs);
        let bounded = levenshtein_with(&a, &b, &costs.with_max_cost(Some(max_cost))).unwrap();
        if truth <= max_cost {
            prop_assert_eq!(bounded, truth);
        } else {
            prop_assert!(bounded > max_cost, "bounded {} <= max {} but truth {}", bounded, max_cost, truth);
        }
    }

    #[test]
    fn damerau_bound_is_sound(
        a in word(),
        b in word(),
        costs in damerau_costs(),
        max_cost in 0u64..15,
    ) {
        let (a, b) = (chars(&a), chars(&b));
        let truth = oracle_damerau(&a, &b, &costs);
        let bounded = damerau_levenshtein_with(&a, &b, &costs.with_max_cost(Some(max_cost))).unwrap();
        if truth <= max_cost {
            prop_assert_eq!(bounded, truth);
        } else {
            prop_assert!(bounded > max_cost, "bounded {} <= max {} but truth {}", bounded, max_cost, truth);
        }
    }

    /// Cheap transpositions change what the recurrence computes, not whether the
    /// prune agrees with it.
    #[test]
    fn damerau_bound_is_sound_below_optimality_threshold(
        a in int_seq(),
        b in int_seq(),
        costs in loose_damerau_costs(),
        max_cost in 0u64..15,
    ) {
        let unbounded = damerau_levenshtein_with(&a, &b, &costs).unwrap();
        let bounded = damerau_levenshtein_with(&a, &b, &costs.with_max_cost(Some(max_cost))).unwrap();
        if unbounded <= max_cost {
            prop_assert_eq!(bounded, unbounded);
        } else {
            prop_assert!(bounded > max_cost && bounded <= unbounded);
        }
    }

    /// A pruned result is still a lower bound on the true distance.
    #[test]
    fn pruned_value_never_overshoots_truth(
        a in int_seq(),
        b in int_seq(),
        costs in damerau_costs(),
        max_cost in 0u64..10,
    ) {
        let bounded = costs.with_max_cost(Some(max_cost));
        prop_assert!(
            levenshtein_with(&a, &b, &bounded).unwrap() <= oracle_levenshtein(&a, &b, &costs)
        );
        prop_assert!(
            damerau_levenshtein_with(&a, &b, &bounded).unwrap() <= oracle_damerau(&a, &b, &costs)
        );
    }

    #[test]
    fn distinct_sequences_over_bound(max_cost in 2usize..30) {
        let costs = CostModel::default().with_max_cost(Some(max_cost));
        let value = vec![0u8; max_cost + 10];
        let other = vec![1u8; max_cost + 10];
        let empty: Vec<u8> = Vec::new();

        for (a, b) in [(&value, &empty), (&empty, &value), (&value, &other)] {
            prop_assert!(levenshtein_with(a, b, &costs).unwrap() > max_cost);
            prop_assert!(damerau_levenshtein_with(a, b, &costs).unwrap() > max_cost);
        }
    }

    #[test]
    fn distinct_sequences_under_bound(max_cost in 10usize..30) {
        let costs = CostModel::default().with_max_cost(Some(max_cost));
        let value = vec![0u8; max_cost - 5];
        let other = vec![1u8; max_cost - 5];
        let empty: Vec<u8> = Vec::new();

        for (a, b) in [(&value, &empty), (&empty, &value), (&value, &other)] {
            prop_assert_eq!(levenshtein_with(a, b, &costs).unwrap(), max_cost - 5);
            prop_assert_eq!(damerau_levenshtein_with(a, b, &costs).unwrap(), max_cost - 5);
        }
    }

    #[test]
    fn unbounded_equals_generous_bound(a in word(), b in word(), costs in damerau_costs()) {
        let (a, b) = (chars(&a), chars(&b));
        let generous = costs.with_max_cost(Some(u64::MAX));
        prop_assert_eq!(levenshtein_with(&a, &b, &costs), levenshtein_with(&a, &b, &generous));
        prop_assert_eq!(
            damerau_levenshtein_with(&a, &b, &costs),
            damerau_levenshtein_with(&a, &b, &generous)
        );
    }
}
