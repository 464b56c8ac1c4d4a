// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted Levenshtein distance: insertion, deletion, substitution.
//!
//! Wagner-Fischer with two rolling rows, so O(n) memory and O(m·n) time. The two
//! sides may have different element types; they only meet through the equality
//! predicate handed to [`levenshtein_by`].
//!
//! Two early exits, both sound:
//! 1. If the length gap alone costs more than `max_cost`, return before allocating.
//! 2. If the minimum of a finished row exceeds `max_cost`, abandon the table.

use crate::contracts::{check_cost_model_valid, check_first_row};
use crate::cost::{Cost, CostModel};
use crate::error::InvalidCostModel;

use super::bound::{shortcut, Budget, Shortcut};

/// Unit-cost Levenshtein distance between two slices.
///
/// ```
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(editwise::levenshtein(&a, &b), 3);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    classic(a, b, &CostModel::default(), |x: &T, y: &T| x == y)
}

/// Weighted Levenshtein distance using `==` on the elements.
pub fn levenshtein_with<T, C>(a: &[T], b: &[T], costs: &CostModel<C>) -> Result<C, InvalidCostModel>
where
    T: PartialEq,
    C: Cost,
{
    levenshtein_by(a, b, costs, |x: &T, y: &T| x == y)
}

/// Weighted Levenshtein distance with a caller-supplied equality predicate.
///
/// Returns the exact distance when it is at most `costs.max_cost` (or no bound is
/// set). Otherwise returns some value strictly greater than the bound. Fails with
/// [`InvalidCostModel::Overflow`] when `C` is too narrow for these lengths.
///
/// ```
/// use editwise::{levenshtein_by, CostModel};
///
/// let words = ["Hello", "World"];
/// let lower = ["hello", "there", "world"];
/// let d = levenshtein_by(&words, &lower, &CostModel::<u32>::default(), |a, b| {
///     a.eq_ignore_ascii_case(b)
/// })
/// .unwrap();
/// assert_eq!(d, 1);
/// ```
pub fn levenshtein_by<T1, T2, C, F>(
    a: &[T1],
    b: &[T2],
    costs: &CostModel<C>,
    eq: F,
) -> Result<C, InvalidCostModel>
where
    C: Cost,
    F: FnMut(&T1, &T2) -> bool,
{
    costs.validate()?;
    costs.distance_ceiling(a.len(), b.len())?;
    Ok(classic(a, b, costs, eq))
}

/// Unit-cost Levenshtein distance over the `char`s of two strings.
pub fn levenshtein_chars(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// Are these strings within `max` unit-cost edits of each other?
///
/// Runs the bounded engine, so far-apart strings bail out after a few rows.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let costs = CostModel::default().with_max_cost(Some(max));
    classic(&a, &b, &costs, |x: &char, y: &char| x == y) <= max
}

/// The classic engine. `costs` must already be validated.
pub(crate) fn classic<T1, T2, C, F>(a: &[T1], b: &[T2], costs: &CostModel<C>, mut eq: F) -> C
where
    C: Cost,
    F: FnMut(&T1, &T2) -> bool,
{
    check_cost_model_valid(costs);

    let budget = Budget::new(costs.max_cost);
    if let Shortcut::Done(distance) = shortcut(a.len(), b.len(), costs, budget) {
        return distance;
    }

    let CostModel {
        insertion,
        deletion,
        substitution,
        ..
    } = *costs;

    let mut prev: Vec<C> = (0..=b.len()).map(|j| insertion.times(j)).collect();
    let mut curr: Vec<C> = vec![C::ZERO; b.len() + 1];
    check_first_row(&prev, insertion);

    for (i, x) in a.iter().enumerate() {
        curr[0] = deletion.times(i + 1);
        let mut row_min = curr[0];

        for (j, y) in b.iter().enumerate() {
            let diagonal = if eq(x, y) {
                prev[j]
            } else {
                prev[j].plus(substitution)
            };
            let cell = prev[j + 1]
                .plus(deletion)
                .min_of(curr[j].plus(insertion))
                .min_of(diagonal);
            curr[j + 1] = cell;
            row_min = row_min.min_of(cell);
        }

        std::mem::swap(&mut prev, &mut curr);

        if let Some(floor) = budget.exceeded_by(row_min) {
            log::trace!(
                "levenshtein: row {}/{} minimum {:?} exceeds bound {:?}",
                i + 1,
                a.len(),
                floor,
                costs.max_cost
            );
            return floor;
        }
    }

    prev[b.len()]
}
