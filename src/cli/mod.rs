// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the editwise command-line interface.
//!
//! Three subcommands: `levenshtein` and `damerau` compute one distance between two
//! strings, `rank` orders a list of candidates by distance to a query. Cost flags
//! override whatever a `--costs` JSON file provides.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::fs;

use editwise::CostModel;

#[derive(Parser)]
#[command(
    name = "editwise",
    about = "Weighted Levenshtein and Damerau-Levenshtein edit distance",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insertion/deletion/substitution distance between two strings
    Levenshtein {
        a: String,
        b: String,

        #[command(flatten)]
        costs: CostArgs,

        /// Compare characters case-insensitively (ASCII)
        #[arg(long)]
        ignore_case: bool,
    },

    /// Distance that also allows transpositions of out-of-order characters
    Damerau {
        a: String,
        b: String,

        #[command(flatten)]
        costs: CostArgs,
    },

    /// Rank candidate words by distance to a query
    Rank {
        query: String,

        /// Candidate words
        #[arg(required = true)]
        candidates: Vec<String>,

        #[command(flatten)]
        costs: CostArgs,

        /// Score with Damerau-Levenshtein instead of Levenshtein
        #[arg(long)]
        damerau: bool,
    },
}

/// Cost model flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct CostArgs {
    /// JSON file with a cost model, e.g. {"substitution": 2, "maxCost": 4}
    #[arg(long, value_name = "FILE")]
    pub costs: Option<String>,

    /// Cost of inserting one character
    #[arg(long)]
    pub insertion: Option<f64>,

    /// Cost of deleting one character
    #[arg(long)]
    pub deletion: Option<f64>,

    /// Cost of substituting one character
    #[arg(long)]
    pub substitution: Option<f64>,

    /// Cost of one transposition (damerau and rank --damerau)
    #[arg(long)]
    pub transposition: Option<f64>,

    /// Stop once the distance is known to exceed this value
    #[arg(long)]
    pub max_cost: Option<f64>,
}

impl CostArgs {
    /// Load the `--costs` file (if any) and apply flag overrides on top.
    pub fn resolve(&self) -> Result<CostModel<f64>, String> {
        let mut model = match &self.costs {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", path, e))?;
                serde_json::from_str(&text)
                    .map_err(|e| format!("Failed to parse {}: {}", path, e))?
            }
            None => CostModel::default(),
        };

        if let Some(cost) = self.insertion {
            model.insertion = cost;
        }
        if let Some(cost) = self.deletion {
            model.deletion = cost;
        }
        if let Some(cost) = self.substitution {
            model.substitution = cost;
        }
        if let Some(cost) = self.transposition {
            model.transposition = cost;
        }
        if self.max_cost.is_some() {
            model.max_cost = self.max_cost;
        }

        log::debug!("cost model: {:?}", model);
        Ok(model)
    }
}
