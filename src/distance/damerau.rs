// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted Damerau-Levenshtein distance with unrestricted transpositions.
//!
//! This is the Lowrance-Wagner formulation: two elements may be swapped even when
//! other elements sit between them, paying the transposition cost plus a deletion
//! for every skipped element of `a` and an insertion for every skipped element of `b`.
//!
//! # Table layout
//!
//! The matrix is `(m+2) × (n+2)`. Row and column 0 hold the sentinel
//! `maxDist = m·deletion + n·insertion`; row and column 1 are the usual
//! "all deletions" / "all insertions" border. Cell `(i+1, j+1)` is the distance
//! between the prefixes `a[..i]` and `b[..j]`.
//!
//! A transposition lookup reads `(k, l)` where `k` is the last row whose `a` element
//! equals `b[j-1]` and `l` the last column in this row whose `b` element equals
//! `a[i-1]`. When either has never been seen it is 0, which lands on the sentinel
//! border and cannot win the minimum.
//!
//! Because a lookup may reach back to any earlier row, the whole matrix is kept.
//!
//! # Cost model requirements
//!
//! The transposition weight may not undercut both insertion and deletion; the
//! weighted entry point rejects such models because the row-minimum prune relies on it.
//!
//! With `2·transposition ≥ insertion + deletion` the result is the cheapest edit
//! sequence. Between the two thresholds the engine still returns the recurrence
//! value, which can be larger than the optimum, and logs a warning saying so.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

use crate::contracts::{check_damerau_model_valid, check_sentinel};
use crate::cost::{Cost, CostModel};
use crate::error::InvalidCostModel;

use super::bound::{shortcut, Budget, Shortcut};

/// Unit-cost Damerau-Levenshtein distance.
///
/// ```
/// let a: Vec<char> = "ca".chars().collect();
/// let b: Vec<char> = "abc".chars().collect();
/// assert_eq!(editwise::damerau_levenshtein(&a, &b), 2);
/// ```
pub fn damerau_levenshtein<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    damerau(a, b, &CostModel::default())
}

/// Weighted Damerau-Levenshtein distance.
///
/// Returns the exact distance when it is at most `costs.max_cost` (or no bound is
/// set). Otherwise returns some value strictly greater than the bound.
///
/// "Exact" means the Lowrance-Wagner recurrence value; see
/// [`CostModel::transpositions_are_optimal`] for when that is also the optimum.
/// Fails with [`InvalidCostModel::Overflow`] when `C` is too narrow for these lengths.
pub fn damerau_levenshtein_with<T, C>(
    a: &[T],
    b: &[T],
    costs: &CostModel<C>,
) -> Result<C, InvalidCostModel>
where
    T: Eq + Hash,
    C: Cost,
{
    costs.validate_damerau()?;
    costs.distance_ceiling(a.len(), b.len())?;
    warn_if_not_optimal(costs);
    Ok(damerau(a, b, costs))
}

pub(crate) fn warn_if_not_optimal<C: Cost>(costs: &CostModel<C>) {
    if !costs.transpositions_are_optimal() {
        log::warn!(
            "transposition {:?} is below (insertion {:?} + deletion {:?}) / 2; \
             damerau results follow the nearest transposition source and may not be minimal",
            costs.transposition,
            costs.insertion,
            costs.deletion
        );
    }
}

/// Unit-cost Damerau-Levenshtein distance over the `char`s of two strings.
pub fn damerau_levenshtein_chars(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    damerau_levenshtein(&a, &b)
}

/// Are these strings within `max` unit-cost edits, counting swaps as one edit?
pub fn damerau_levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let costs = CostModel::default().with_max_cost(Some(max));
    damerau(&a, &b, &costs) <= max
}

/// Dense row-major matrix owned by a single distance call.
struct Matrix<C> {
    cells: Vec<C>,
    columns: usize,
}

impl<C: Copy> Matrix<C> {
    fn new(rows: usize, columns: usize, fill: C) -> Self {
        Self {
            cells: vec![fill; rows * columns],
            columns,
        }
    }
}

impl<C> Index<(usize, usize)> for Matrix<C> {
    type Output = C;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &C {
        &self.cells[row * self.columns + column]
    }
}

impl<C> IndexMut<(usize, usize)> for Matrix<C> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut C {
        &mut self.cells[row * self.columns + column]
    }
}

/// The Damerau engine. `costs` must already have passed `validate_damerau`.
pub(crate) fn damerau<T, C>(a: &[T], b: &[T], costs: &CostModel<C>) -> C
where
    T: Eq + Hash,
    C: Cost,
{
    check_damerau_model_valid(costs);

    let budget = Budget::new(costs.max_cost);
    let (m, n) = (a.len(), b.len());
    if let Shortcut::Done(distance) = shortcut(m, n, costs, budget) {
        return distance;
    }

    let CostModel {
        insertion,
        deletion,
        substitution,
        transposition,
        ..
    } = *costs;

    let max_dist = deletion.times(m).plus(insertion.times(n));
    check_sentinel(max_dist, m, n, costs);

    let mut d = Matrix::new(m + 2, n + 2, C::ZERO);
    d[(0, 0)] = max_dist;
    for i in 0..=m {
        d[(i + 1, 0)] = max_dist;
        d[(i + 1, 1)] = deletion.times(i);
    }
    for j in 0..=n {
        d[(0, j + 1)] = max_dist;
        d[(1, j + 1)] = insertion.times(j);
    }

    // Last row (1-based) at which each value of `a` was seen; absent means 0
    let mut last_row: HashMap<&T, usize> = HashMap::new();

    for i in 1..=m {
        let x = &a[i - 1];
        let mut last_match_column = 0;
        let mut row_min = d[(i + 1, 1)];

        for j in 1..=n {
            let y = &b[j - 1];
            let k = last_row.get(y).copied().unwrap_or(0);
            let l = last_match_column;

            let matched = x == y;
            if matched {
                last_match_column = j;
            }

            let diagonal = if matched {
                d[(i, j)]
            } else {
                d[(i, j)].plus(substitution)
            };
            let transposed = d[(k, l)]
                .plus(deletion.times(i - k - 1))
                .plus(transposition)
                .plus(insertion.times(j - l - 1));

            let cell = diagonal
                .min_of(d[(i + 1, j)].plus(insertion))
                .min_of(d[(i, j + 1)].plus(deletion))
                .min_of(transposed);
            d[(i + 1, j + 1)] = cell;
            row_min = row_min.min_of(cell);
        }

        last_row.insert(x, i);

        if let Some(floor) = budget.exceeded_by(row_min) {
            log::trace!(
                "damerau: row {}/{} minimum {:?} exceeds bound {:?}",
                i,
                m,
                floor,
                costs.max_cost
            );
            return floor;
        }
    }

    d[(m + 1, n + 1)]
}
