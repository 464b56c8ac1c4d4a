// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the classic engine.
//!
//! Checks identity, the length lower bound, and that a bounded run either agrees
//! with the unbounded distance or reports something strictly over the bound.

#![no_main]

use arbitrary::Arbitrary;
use editwise::{levenshtein_with, CostModel};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    insertion: u8,
    deletion: u8,
    substitution: u8,
    max_cost: Option<u16>,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a = &input.a[..input.a.len().min(64)];
    let b = &input.b[..input.b.len().min(64)];

    let costs = CostModel::<u32>::default()
        .with_insertion(u32::from(input.insertion))
        .with_deletion(u32::from(input.deletion))
        .with_substitution(u32::from(input.substitution));

    let exact = match levenshtein_with(a, b, &costs) {
        Ok(d) => d,
        Err(e) => panic!("unsigned cost model rejected: {}", e),
    };

    // INVARIANT 1: identity
    assert_eq!(levenshtein_with(a, a, &costs).ok(), Some(0));

    // INVARIANT 2: length gap is a lower bound
    assert!(exact >= costs.length_floor(a.len(), b.len()));

    // INVARIANT 3: bounded search is exact within the bound, over it otherwise
    if let Some(max_cost) = input.max_cost {
        let max_cost = u32::from(max_cost);
        let bounded = levenshtein_with(a, b, &costs.with_max_cost(Some(max_cost))).ok();
        if exact <= max_cost {
            assert_eq!(bounded, Some(exact), "a={:?} b={:?} costs={:?}", a, b, costs);
        } else {
            assert!(bounded.is_some_and(|d| d > max_cost && d <= exact));
        }
    }
});
