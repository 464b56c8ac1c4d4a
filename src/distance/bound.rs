// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bounded-search short-circuit shared by both engines.
//!
//! After each row of the table, the smallest value in that row is a lower bound on
//! the final distance: every edit path crosses the row (or, for a transposition that
//! jumps over it, passes within reach of a row cell that costs no more). Once that
//! floor is above `max_cost` the answer is settled and the rest of the table is skipped.
//!
//! The value handed back on a prune is the floor itself. It is strictly greater than
//! the bound and never greater than the true distance.

use crate::cost::{Cost, CostModel};

/// How much work the caller is willing to pay for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Budget<C> {
    /// No bound: never prune.
    Unbounded,
    /// Prune once the distance is provably above this value.
    AtMost(C),
}

impl<C: Cost> Budget<C> {
    pub(crate) fn new(max_cost: Option<C>) -> Self {
        match max_cost {
            Some(bound) => Budget::AtMost(bound),
            None => Budget::Unbounded,
        }
    }

    /// `Some(floor)` if `floor` proves the distance is over budget.
    #[inline]
    pub(crate) fn exceeded_by(self, floor: C) -> Option<C> {
        match self {
            Budget::Unbounded => None,
            Budget::AtMost(bound) => (floor > bound).then_some(floor),
        }
    }
}

/// Result of the checks every engine runs before allocating a table.
pub(crate) enum Shortcut<C> {
    /// The answer is known without running the recurrence.
    Done(C),
    /// Both sequences are non-empty and the length gap fits the budget.
    Run,
}

/// Empty-input and length-gap shortcuts.
///
/// An empty side costs exactly one insertion or deletion per element of the other.
/// Otherwise, if the length gap alone already costs more than the budget allows,
/// return that gap cost.
pub(crate) fn shortcut<C: Cost>(
    m: usize,
    n: usize,
    costs: &CostModel<C>,
    budget: Budget<C>,
) -> Shortcut<C> {
    if m == 0 {
        return Shortcut::Done(costs.insertion.times(n));
    }
    if n == 0 {
        return Shortcut::Done(costs.deletion.times(m));
    }
    match budget.exceeded_by(costs.length_floor(m, n)) {
        Some(floor) => {
            log::trace!("length gap {}x{} costs {:?}, over budget", m, n, floor);
            Shortcut::Done(floor)
        }
        None => Shortcut::Run,
    }
}
