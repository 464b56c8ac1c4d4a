// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The `CostModel` field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Insertion,
    Deletion,
    Substitution,
    Transposition,
    MaxCost,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Insertion => "insertion",
            Operation::Deletion => "deletion",
            Operation::Substitution => "substitution",
            Operation::Transposition => "transposition",
            Operation::MaxCost => "max_cost",
        };
        f.write_str(name)
    }
}

/// A cost model the engines refuse to run with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCostModel {
    /// A weight or the bound is below zero.
    #[error("{operation} must be non-negative")]
    Negative { operation: Operation },

    /// A floating-point weight or bound is NaN or infinite.
    #[error("{operation} must be finite")]
    NotFinite { operation: Operation },

    /// `transposition < min(insertion, deletion)`.
    #[error(
        "transposition cost {transposition} is cheaper than both \
         insertion ({insertion}) and deletion ({deletion})"
    )]
    TranspositionTooCheap {
        transposition: String,
        insertion: String,
        deletion: String,
    },

    /// `m·deletion + n·insertion` does not fit the cost type, so a distance
    /// between these lengths could be clipped.
    #[error("distance between sequences of length {m} and {n} overflows the cost type")]
    Overflow { m: usize, n: usize },
}
