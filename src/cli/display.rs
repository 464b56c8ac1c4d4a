// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output formatting for the editwise CLI.
//!
//! Plain text for humans, one JSON object per invocation with `--json`. A distance
//! cut short by `--max-cost` prints as `>{bound}` rather than a number that only
//! looks exact.

use serde::Serialize;

use editwise::Match;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DistanceReport<'a> {
    a: &'a str,
    b: &'a str,
    /// Exact distance, absent when the bound was exceeded.
    distance: Option<f64>,
    exceeded: bool,
    max_cost: Option<f64>,
}

#[derive(Serialize)]
struct RankedCandidate<'a> {
    candidate: &'a str,
    distance: f64,
}

/// Was the result cut short by the bound?
fn exceeded(distance: f64, max_cost: Option<f64>) -> bool {
    max_cost.is_some_and(|bound| distance > bound)
}

/// Text form of a single distance.
pub fn format_distance(distance: f64, max_cost: Option<f64>) -> String {
    match max_cost {
        Some(bound) if distance > bound => format!(">{}", bound),
        _ => format!("{}", distance),
    }
}

pub fn distance_json(
    a: &str,
    b: &str,
    distance: f64,
    max_cost: Option<f64>,
) -> serde_json::Result<String> {
    let over = exceeded(distance, max_cost);
    serde_json::to_string(&DistanceReport {
        a,
        b,
        distance: (!over).then_some(distance),
        exceeded: over,
        max_cost,
    })
}

/// One `distance<TAB>candidate` line per match.
pub fn format_ranking(matches: &[Match<f64>], candidates: &[String]) -> String {
    matches
        .iter()
        .map(|m| format!("{}\t{}", m.distance, candidates[m.index]))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn ranking_json(matches: &[Match<f64>], candidates: &[String]) -> serde_json::Result<String> {
    let ranked: Vec<RankedCandidate<'_>> = matches
        .iter()
        .map(|m| RankedCandidate {
            candidate: &candidates[m.index],
            distance: m.distance,
        })
        .collect();
    serde_json::to_string(&ranked)
}
