// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Damerau engine.
//!
//! Transposition cost is lifted to at least `min(insertion, deletion)` so every
//! input exercises the engine instead of the validator. Checks identity, that
//! transpositions never make things worse than Levenshtein, and bound soundness.

#![no_main]

use arbitrary::Arbitrary;
use editwise::{damerau_levenshtein_with, levenshtein_with, CostModel};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    insertion: u8,
    deletion: u8,
    substitution: u8,
    transposition: u8,
    max_cost: Option<u16>,
}

fuzz_target!(|input: DistanceInput| {
    let a = &input.a[..input.a.len().min(48)];
    let b = &input.b[..input.b.len().min(48)];

    let insertion = u32::from(input.insertion);
    let deletion = u32::from(input.deletion);
    let transposition = u32::from(input.transposition).max(insertion.min(deletion));
    let costs = CostModel::<u32>::default()
        .with_insertion(insertion)
        .with_deletion(deletion)
        .with_substitution(u32::from(input.substitution))
        .with_transposition(transposition);

    let exact = match damerau_levenshtein_with(a, b, &costs) {
        Ok(d) => d,
        Err(e) => panic!("valid cost model rejected: {}", e),
    };

    // INVARIANT 1: identity
    assert_eq!(damerau_levenshtein_with(a, a, &costs).ok(), Some(0));

    // INVARIANT 2: transpositions only add options
    let classic = levenshtein_with(a, b, &costs).ok();
    assert!(classic.is_some_and(|d| exact <= d));

    // INVARIANT 3: bounded search is exact within the bound, over it otherwise
    if let Some(max_cost) = input.max_cost {
        let max_cost = u32::from(max_cost);
        let bounded = damerau_levenshtein_with(a, b, &costs.with_max_cost(Some(max_cost))).ok();
        if exact <= max_cost {
            assert_eq!(bounded, Some(exact), "a={:?} b={:?} costs={:?}", a, b, costs);
        } else {
            assert!(bounded.is_some_and(|d| d > max_cost && d <= exact));
        }
    }
});
