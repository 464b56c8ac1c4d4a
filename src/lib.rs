// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted edit distance between two sequences, with bounded search.
//!
//! Two engines share one cost model and one early-termination strategy:
//!
//! ```text
//! ┌──────────────┐     ┌────────────────────────┐
//! │   cost.rs    │────▶│ distance/levenshtein.rs │  two rolling rows, any predicate
//! │ (CostModel,  │     └────────────────────────┘
//! │  Cost)       │     ┌────────────────────────┐
//! │              │────▶│ distance/damerau.rs     │  full matrix + last-occurrence map
//! └──────────────┘     └────────────────────────┘
//!        │                        │
//!        ▼                        ▼
//! ┌──────────────────────────────────────────────┐
//! │ distance/bound.rs (Budget: row-minimum prune) │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Sequences are plain slices. The classic engine accepts two different element
//! types joined by an equality predicate; the Damerau engine needs `Eq + Hash`
//! elements because it indexes the last row each value was seen on.
//!
//! # Bounded search
//!
//! Set `max_cost` and the engines stop as soon as the distance is provably larger,
//! returning some value strictly greater than the bound. When the true distance is
//! within the bound the result is exact.
//!
//! # Usage
//!
//! ```
//! use editwise::{damerau_levenshtein_with, levenshtein_chars, CostModel};
//!
//! assert_eq!(levenshtein_chars("kitten", "sitting"), 3);
//!
//! let costs = CostModel::<u32>::default().with_substitution(2).with_max_cost(Some(5));
//! let a: Vec<char> = "acbd".chars().collect();
//! let b: Vec<char> = "abcd".chars().collect();
//! assert_eq!(damerau_levenshtein_with(&a, &b, &costs), Ok(1));
//! ```

pub mod contracts;
mod cost;
mod distance;
mod error;
mod search;

pub use cost::{Cost, CostModel};
pub use distance::{
    damerau_levenshtein, damerau_levenshtein_chars, damerau_levenshtein_with,
    damerau_levenshtein_within, levenshtein, levenshtein_by, levenshtein_chars,
    levenshtein_with, levenshtein_within,
};
pub use error::{InvalidCostModel, Operation};
pub use search::{rank_candidates, Match, Metric};
