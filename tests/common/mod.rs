//! Shared test utilities and strategies.

#![allow(dead_code)]

use editwise::CostModel;
use proptest::prelude::*;

// ============================================================================
// HELPERS
// ============================================================================

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// `val` with `affix` spliced in at the midpoint.
pub fn infix<T: Clone>(val: &[T], affix: &[T]) -> Vec<T> {
    let mid = val.len() / 2;
    let mut out = val[..mid].to_vec();
    out.extend_from_slice(affix);
    out.extend_from_slice(&val[mid..]);
    out
}

/// `val` with its middle `affix.len()` elements replaced by `affix`.
pub fn overwrite_middle<T: Clone>(val: &[T], affix: &[T]) -> Vec<T> {
    let start = (val.len() - affix.len()) / 2;
    let mut out = val[..start].to_vec();
    out.extend_from_slice(affix);
    out.extend_from_slice(&val[start + affix.len()..]);
    out
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short lowercase words over a small alphabet, so matches are common.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,10}").unwrap()
}

/// Arbitrary strings including multi-byte characters.
pub fn any_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zé日本ß ]{0,16}").unwrap()
}

/// Integer sequences over a small range.
pub fn int_seq() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..6, 0..12)
}

/// Classic-engine weights in `1..=5`, unbounded.
pub fn classic_costs() -> impl Strategy<Value = CostModel<u64>> {
    (1u64..=5, 1u64..=5, 1u64..=5).prop_map(|(insertion, deletion, substitution)| {
        CostModel::default()
            .with_insertion(insertion)
            .with_deletion(deletion)
            .with_substitution(substitution)
    })
}

/// Damerau weights that pass validation but may sit below the optimality threshold.
pub fn loose_damerau_costs() -> impl Strategy<Value = CostModel<u64>> {
    (1u64..=5, 1u64..=5, 1u64..=5, 0u64..=4).prop_map(
        |(insertion, deletion, substitution, slack)| {
            CostModel::default()
                .with_insertion(insertion)
                .with_deletion(deletion)
                .with_substitution(substitution)
                .with_transposition(insertion.min(deletion) + slack)
        },
    )
}

/// Damerau weights satisfying `2·transposition ≥ insertion + deletion`, unbounded.
pub fn damerau_costs() -> impl Strategy<Value = CostModel<u64>> {
    (1u64..=5, 1u64..=5, 1u64..=5, 0u64..=3).prop_map(
        |(insertion, deletion, substitution, slack)| {
            let transposition = (insertion + deletion).div_ceil(2) + slack;
            CostModel::default()
                .with_insertion(insertion)
                .with_deletion(deletion)
                .with_substitution(substitution)
                .with_transposition(transposition)
        },
    )
}
