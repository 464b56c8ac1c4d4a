// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the dynamic-programming engines.
//!
//! Debug-mode assertions that check the table invariants the recurrences rely on.
//! They compile to nothing in release builds and fail loudly in tests.
//!
//! | Contract Function           | Invariant                                         |
//! |-----------------------------|---------------------------------------------------|
//! | `check_cost_model_valid`    | engine entered with a validated model             |
//! | `check_damerau_model_valid` | ... and `transposition ≥ min(ins, del)`           |
//! | `check_first_row`           | `D[0][j] = j·insertion`                           |
//! | `check_sentinel`            | `maxDist = m·deletion + n·insertion`, no overflow |

use crate::cost::{Cost, CostModel};

/// The engine was entered with a model that passed validation.
#[inline]
pub fn check_cost_model_valid<C: Cost>(costs: &CostModel<C>) {
    debug_assert!(
        costs.validate().is_ok(),
        "Contract violation: engine entered with invalid cost model {:?}",
        costs
    );
}

/// The Damerau engine was entered with a model that passed `validate_damerau`.
#[inline]
pub fn check_damerau_model_valid<C: Cost>(costs: &CostModel<C>) {
    debug_assert!(
        costs.validate_damerau().is_ok(),
        "Contract violation: damerau engine entered with invalid cost model {:?}",
        costs
    );
}

/// The seed row holds the cost of reaching each prefix of `b` by insertions alone.
#[inline]
pub fn check_first_row<C: Cost>(row: &[C], insertion: C) {
    for (j, &cell) in row.iter().enumerate() {
        debug_assert!(
            cell == insertion.times(j),
            "Contract violation: D[0][{}] = {:?}, expected {:?}",
            j,
            cell,
            insertion.times(j)
        );
    }
}

/// The Damerau border sentinel dominates every real cell.
///
/// Any cell `D[i][j]` is at most `i·deletion + j·insertion` (delete everything,
/// insert everything), so a border value of `m·deletion + n·insertion` can never
/// be the unique minimum of a transposition lookup that starts at the border.
#[inline]
pub fn check_sentinel<C: Cost>(sentinel: C, m: usize, n: usize, costs: &CostModel<C>) {
    debug_assert!(
        costs.distance_ceiling(m, n) == Ok(sentinel),
        "Contract violation: sentinel {:?} for {}x{} table",
        sentinel,
        m,
        n
    );
}
