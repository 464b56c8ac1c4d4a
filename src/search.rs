// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank a list of candidate words by edit distance to a query.
//!
//! This is the spell-correction shape of the problem: one misspelled query, a
//! vocabulary of candidates, keep the ones within `max_cost` and order them by
//! distance. The bound does double duty here. Candidates whose length gap is already
//! too expensive never allocate a table, and the rest abandon their table as soon as
//! a row proves them out of range.
//!
//! With the `parallel` feature, candidates are scored with rayon. Output is identical
//! either way: matches sort by `(distance, index)`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::cost::{Cost, CostModel};
use crate::distance::{classic, damerau, warn_if_not_optimal};
use crate::error::InvalidCostModel;

/// Which engine scores the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Insertion, deletion, substitution.
    #[default]
    Levenshtein,
    /// Adds transpositions of out-of-order characters.
    Damerau,
}

/// A candidate that fell within the bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match<C> {
    /// Position in the candidate list.
    pub index: usize,
    pub distance: C,
}

/// Score `candidates` against `query` and return those within `costs.max_cost`.
///
/// With no bound every candidate is returned. Matches are sorted by ascending
/// distance, ties broken by candidate order.
///
/// ```
/// use editwise::{rank_candidates, CostModel, Metric};
///
/// let words = ["receive", "recipe", "deceive", "relieve"];
/// let costs = CostModel::default().with_max_cost(Some(1));
/// let matches = rank_candidates("recieve", &words, &costs, Metric::Damerau).unwrap();
/// assert_eq!(matches[0].index, 0);
/// assert_eq!(matches[0].distance, 1);
/// ```
pub fn rank_candidates<S, C>(
    query: &str,
    candidates: &[S],
    costs: &CostModel<C>,
    metric: Metric,
) -> Result<Vec<Match<C>>, InvalidCostModel>
where
    S: AsRef<str> + Sync,
    C: Cost,
{
    match metric {
        Metric::Levenshtein => costs.validate()?,
        Metric::Damerau => {
            costs.validate_damerau()?;
            warn_if_not_optimal(costs);
        }
    }

    let query: Vec<char> = query.chars().collect();
    for candidate in candidates {
        costs.distance_ceiling(query.len(), candidate.as_ref().chars().count())?;
    }
    let score = |(index, candidate): (usize, &S)| -> Option<Match<C>> {
        let candidate: Vec<char> = candidate.as_ref().chars().collect();
        let distance = match metric {
            Metric::Levenshtein => classic(&query, &candidate, costs, |x: &char, y: &char| x == y),
            Metric::Damerau => damerau(&query, &candidate, costs),
        };
        match costs.max_cost {
            Some(bound) if distance > bound => None,
            _ => Some(Match { index, distance }),
        }
    };

    #[cfg(feature = "parallel")]
    let mut matches: Vec<Match<C>> = candidates.par_iter().enumerate().filter_map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let mut matches: Vec<Match<C>> = candidates.iter().enumerate().filter_map(score).collect();

    matches.sort_by(|x, y| {
        x.distance
            .partial_cmp(&y.distance)
            .unwrap_or(Ordering::Equal)
            .then(x.index.cmp(&y.index))
    });

    log::debug!(
        "rank_candidates: {} of {} candidates within {:?} ({:?})",
        matches.len(),
        candidates.len(),
        costs.max_cost,
        metric
    );

    Ok(matches)
}
