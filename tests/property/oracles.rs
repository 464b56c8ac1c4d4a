//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations with no pruning and no clever
//! bookkeeping. They are slow, which is fine for the short inputs proptest feeds them.

use editwise::{damerau_levenshtein_with, levenshtein_with, CostModel};
use proptest::prelude::*;

use super::common::{chars, classic_costs, damerau_costs, int_seq, word};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Full-matrix weighted Wagner-Fischer.
pub fn oracle_levenshtein<T: PartialEq>(a: &[T], b: &[T], costs: &CostModel<u64>) -> u64 {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0u64; n + 1]; m + 1];
    for i in 0..=m {
        d[i][0] = i as u64 * costs.deletion;
    }
    for j in 0..=n {
        d[0][j] = j as u64 * costs.insertion;
    }
    for i in 1..=m {
        for j in 1..=n {
            let sub = if a[i - 1] == b[j - 1] {
                0
            } else {
                costs.substitution
            };
            d[i][j] = (d[i - 1][j] + costs.deletion)
                .min(d[i][j - 1] + costs.insertion)
                .min(d[i - 1][j - 1] + sub);
        }
    }
    d[m][n]
}

/// Weighted unrestricted Damerau-Levenshtein, trying every transposition source.
///
/// `D(i, j)` also considers every `k < i`, `l < j` with `a[k] == b[j]` and
/// `a[i] == b[l]` (1-based), instead of only the most recent ones. O(m²n²).
pub fn oracle_damerau<T: PartialEq>(a: &[T], b: &[T], costs: &CostModel<u64>) -> u64 {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0u64; n + 1]; m + 1];
    for i in 0..=m {
        d[i][0] = i as u64 * costs.deletion;
    }
    for j in 0..=n {
        d[0][j] = j as u64 * costs.insertion;
    }
    for i in 1..=m {
        for j in 1..=n {
            let sub = if a[i - 1] == b[j - 1] {
                0
            } else {
                costs.substitution
            };
            let mut best = (d[i - 1][j] + costs.deletion)
                .min(d[i][j - 1] + costs.insertion)
                .min(d[i - 1][j - 1] + sub);
            for k in 1..i {
                if a[k - 1] != b[j - 1] {
                    continue;
                }
                for l in 1..j {
                    if a[i - 1] != b[l - 1] {
                        continue;
                    }
                    let swap = d[k - 1][l - 1]
                        + (i - k - 1) as u64 * costs.deletion
                        + costs.transposition
                        + (j - l - 1) as u64 * costs.insertion;
                    best = best.min(swap);
                }
            }
            d[i][j] = best;
        }
    }
    d[m][n]
}

// =============================================================================
// ORACLE SANITY
// =============================================================================

#[test]
fn oracles_agree_on_known_values() {
    let unit = CostModel::<u64>::default();
    assert_eq!(oracle_levenshtein(&chars("kitten"), &chars("sitting"), &unit), 3);
    assert_eq!(oracle_damerau(&chars("ca"), &chars("abc"), &unit), 2);
    assert_eq!(oracle_damerau(&chars("acbd"), &chars("abcd"), &unit), 1);
}

// =============================================================================
// DIFFERENTIAL PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn classic_matches_oracle(a in word(), b in word(), costs in classic_costs()) {
        let (a, b) = (chars(&a), chars(&b));
        prop_assert_eq!(levenshtein_with(&a, &b, &costs).unwrap(), oracle_levenshtein(&a, &b, &costs));
    }

    #[test]
    fn classic_matches_oracle_on_integers(a in int_seq(), b in int_seq(), costs in classic_costs()) {
        prop_assert_eq!(levenshtein_with(&a, &b, &costs).unwrap(), oracle_levenshtein(&a, &b, &costs));
    }

    #[test]
    fn damerau_matches_oracle(a in word(), b in word(), costs in damerau_costs()) {
        let (a, b) = (chars(&a), chars(&b));
        prop_assert_eq!(
            damerau_levenshtein_with(&a, &b, &costs).unwrap(),
            oracle_damerau(&a, &b, &costs)
        );
    }

    #[test]
    fn damerau_matches_oracle_on_integers(a in int_seq(), b in int_seq(), costs in damerau_costs()) {
        prop_assert_eq!(
            damerau_levenshtein_with(&a, &b, &costs).unwrap(),
            oracle_damerau(&a, &b, &costs)
        );
    }

    /// strsim is an independent implementation of the unit-cost variants.
    #[test]
    fn unit_costs_match_strsim(a in word(), b in word()) {
        prop_assert_eq!(editwise::levenshtein_chars(&a, &b), strsim::levenshtein(&a, &b));
        prop_assert_eq!(
            editwise::damerau_levenshtein_chars(&a, &b),
            strsim::generic_damerau_levenshtein(&chars(&a), &chars(&b))
        );
    }
}
