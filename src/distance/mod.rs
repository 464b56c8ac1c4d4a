// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance engines.
//!
//! Two implementations here: the classic Levenshtein engine with two rolling rows
//! and an injectable equality predicate, and the Damerau engine with a full matrix
//! and a last-occurrence index for transpositions. Both share the same bounded-search
//! short-circuit.

mod bound;
mod damerau;
mod levenshtein;

pub use damerau::{
    damerau_levenshtein, damerau_levenshtein_chars, damerau_levenshtein_with,
    damerau_levenshtein_within,
};
pub use levenshtein::{
    levenshtein, levenshtein_by, levenshtein_chars, levenshtein_with, levenshtein_within,
};

pub(crate) use damerau::{damerau, warn_if_not_optimal};
pub(crate) use levenshtein::classic;
