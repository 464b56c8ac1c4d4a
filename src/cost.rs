// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-operation weights for the edit distance engines.
//!
//! A `CostModel` is a plain record: four operation weights and an optional bound.
//! Nothing is checked at construction. The engines call [`CostModel::validate`]
//! (or [`CostModel::validate_damerau`]) on entry, so an invalid model is reported
//! as an error instead of producing a number that looks exact but isn't.
//!
//! Costs are generic over [`Cost`], which covers the unsigned and signed integer
//! types plus `f32`/`f64`. Integer arithmetic inside the engines saturates. The
//! weighted entry points first check that [`CostModel::distance_ceiling`] fits, so
//! only candidates that can never win a minimum get clipped.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{InvalidCostModel, Operation};

/// Numeric type usable as an edit cost.
pub trait Cost: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// Sum of two costs. Saturates for integers.
    fn plus(self, other: Self) -> Self;

    /// `self` repeated `n` times. Saturates for integers.
    fn times(self, n: usize) -> Self;

    /// Sum, or `None` if it does not fit (or is not finite, for floats).
    fn checked_plus(self, other: Self) -> Option<Self>;

    /// `self` repeated `n` times, or `None` if it does not fit.
    fn checked_times(self, n: usize) -> Option<Self>;

    /// Non-negative (and finite, for floats).
    fn is_valid(self) -> bool;

    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

macro_rules! unsigned_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn plus(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline]
            fn times(self, n: usize) -> Self {
                let n = <$t>::try_from(n).unwrap_or(<$t>::MAX);
                self.saturating_mul(n)
            }

            #[inline]
            fn checked_plus(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }

            #[inline]
            fn checked_times(self, n: usize) -> Option<Self> {
                <$t>::try_from(n).ok().and_then(|n| self.checked_mul(n))
            }

            #[inline]
            fn is_valid(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! signed_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn plus(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline]
            fn times(self, n: usize) -> Self {
                let n = <$t>::try_from(n).unwrap_or(<$t>::MAX);
                self.saturating_mul(n)
            }

            #[inline]
            fn checked_plus(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }

            #[inline]
            fn checked_times(self, n: usize) -> Option<Self> {
                <$t>::try_from(n).ok().and_then(|n| self.checked_mul(n))
            }

            #[inline]
            fn is_valid(self) -> bool {
                self >= 0
            }
        }
    )*};
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn plus(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn times(self, n: usize) -> Self {
                self * n as $t
            }

            #[inline]
            fn checked_plus(self, other: Self) -> Option<Self> {
                Some(self + other).filter(|sum| sum.is_finite())
            }

            #[inline]
            fn checked_times(self, n: usize) -> Option<Self> {
                Some(self * n as $t).filter(|product| product.is_finite())
            }

            #[inline]
            fn is_valid(self) -> bool {
                self.is_finite() && self >= 0.0
            }
        }
    )*};
}

unsigned_cost!(u8, u16, u32, u64, usize);
signed_cost!(i32, i64);
float_cost!(f32, f64);

/// Weights for each edit operation, plus an optional cost ceiling.
///
/// Every weight defaults to one and the bound defaults to `None` (unbounded).
/// `transposition` is only read by the Damerau engine.
///
/// ```
/// use editwise::CostModel;
///
/// let costs = CostModel::default().with_substitution(2).with_max_cost(Some(4));
/// assert_eq!(costs.insertion, 1);
/// assert_eq!(costs.max_cost, Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(deserialize = "C: Cost + Deserialize<'de>")
)]
pub struct CostModel<C = usize> {
    pub insertion: C,
    pub deletion: C,
    pub substitution: C,
    pub transposition: C,
    /// Abort-and-overshoot threshold. `None` disables pruning entirely.
    pub max_cost: Option<C>,
}

impl<C: Cost> Default for CostModel<C> {
    fn default() -> Self {
        Self {
            insertion: C::ONE,
            deletion: C::ONE,
            substitution: C::ONE,
            transposition: C::ONE,
            max_cost: None,
        }
    }
}

impl<C: Cost> CostModel<C> {
    pub fn with_insertion(mut self, cost: C) -> Self {
        self.insertion = cost;
        self
    }

    pub fn with_deletion(mut self, cost: C) -> Self {
        self.deletion = cost;
        self
    }

    pub fn with_substitution(mut self, cost: C) -> Self {
        self.substitution = cost;
        self
    }

    pub fn with_transposition(mut self, cost: C) -> Self {
        self.transposition = cost;
        self
    }

    pub fn with_max_cost(mut self, max_cost: Option<C>) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Check the weights used by the classic engine and the bound.
    pub fn validate(&self) -> Result<(), InvalidCostModel> {
        check(Operation::Insertion, self.insertion)?;
        check(Operation::Deletion, self.deletion)?;
        check(Operation::Substitution, self.substitution)?;
        if let Some(max_cost) = self.max_cost {
            check(Operation::MaxCost, max_cost)?;
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate), plus the transposition weight, which must
    /// be at least `min(insertion, deletion)`.
    ///
    /// A cheaper transposition lets a later row undercut an earlier row's minimum,
    /// and the row-minimum prune would stop being sound.
    pub fn validate_damerau(&self) -> Result<(), InvalidCostModel> {
        self.validate()?;
        check(Operation::Transposition, self.transposition)?;
        if self.transposition < self.insertion.min_of(self.deletion) {
            return Err(InvalidCostModel::TranspositionTooCheap {
                transposition: format!("{:?}", self.transposition),
                insertion: format!("{:?}", self.insertion),
                deletion: format!("{:?}", self.deletion),
            });
        }
        Ok(())
    }

    /// `2·transposition ≥ insertion + deletion`.
    ///
    /// When this holds the Damerau recurrence, which only looks back to the most
    /// recent transposition source, finds the cheapest edit sequence. When it doesn't,
    /// the result is still the recurrence value but may overstate the optimal cost.
    pub fn transpositions_are_optimal(&self) -> bool {
        self.transposition.plus(self.transposition) >= self.insertion.plus(self.deletion)
    }

    /// Upper bound on any distance between sequences of lengths `m` and `n`:
    /// `m·deletion + n·insertion`, computed without saturating.
    ///
    /// Every table cell is at most this value, so when it fits in `C` the engines'
    /// saturating arithmetic can only clip candidates that never win a minimum.
    /// When it doesn't fit, a result could be clipped and is refused instead.
    pub fn distance_ceiling(&self, m: usize, n: usize) -> Result<C, InvalidCostModel> {
        self.deletion
            .checked_times(m)
            .zip(self.insertion.checked_times(n))
            .and_then(|(deletions, insertions)| deletions.checked_plus(insertions))
            .ok_or(InvalidCostModel::Overflow { m, n })
    }

    /// Lower bound on any distance between sequences of lengths `m` and `n`.
    ///
    /// Each insertion or deletion changes the length by one and nothing else does,
    /// so the length gap has to be paid for in full.
    pub fn length_floor(&self, m: usize, n: usize) -> C {
        if n > m {
            self.insertion.times(n - m)
        } else {
            self.deletion.times(m - n)
        }
    }
}

fn check<C: Cost>(operation: Operation, value: C) -> Result<(), InvalidCostModel> {
    if value.is_valid() {
        return Ok(());
    }
    // NaN fails both comparisons, so anything not below zero is non-finite
    if value < C::ZERO {
        Err(InvalidCostModel::Negative { operation })
    } else {
        Err(InvalidCostModel::NotFinite { operation })
    }
}
