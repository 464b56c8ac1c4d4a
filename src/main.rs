// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use editwise::{
    damerau_levenshtein_with, levenshtein_by, levenshtein_with, rank_candidates, Metric,
};

mod cli;
use cli::display::{distance_json, format_distance, format_ranking, ranking_json};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // A logger may already be installed when embedded; nothing to do then
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Levenshtein {
            a,
            b,
            costs,
            ignore_case,
        } => {
            let model = costs.resolve()?;
            let x: Vec<char> = a.chars().collect();
            let y: Vec<char> = b.chars().collect();
            let distance = if ignore_case {
                levenshtein_by(&x, &y, &model, |p: &char, q: &char| p.eq_ignore_ascii_case(q))
            } else {
                levenshtein_with(&x, &y, &model)
            }
            .map_err(|e| e.to_string())?;
            print_distance(&a, &b, distance, model.max_cost, cli.json)
        }
        Commands::Damerau { a, b, costs } => {
            let model = costs.resolve()?;
            let x: Vec<char> = a.chars().collect();
            let y: Vec<char> = b.chars().collect();
            let distance = damerau_levenshtein_with(&x, &y, &model).map_err(|e| e.to_string())?;
            print_distance(&a, &b, distance, model.max_cost, cli.json)
        }
        Commands::Rank {
            query,
            candidates,
            costs,
            damerau,
        } => {
            let model = costs.resolve()?;
            let metric = if damerau {
                Metric::Damerau
            } else {
                Metric::Levenshtein
            };
            let matches =
                rank_candidates(&query, &candidates, &model, metric).map_err(|e| e.to_string())?;
            if cli.json {
                println!(
                    "{}",
                    ranking_json(&matches, &candidates).map_err(|e| e.to_string())?
                );
            } else if !matches.is_empty() {
                println!("{}", format_ranking(&matches, &candidates));
            }
            Ok(())
        }
    }
}

fn print_distance(
    a: &str,
    b: &str,
    distance: f64,
    max_cost: Option<f64>,
    json: bool,
) -> Result<(), String> {
    if json {
        println!(
            "{}",
            distance_json(a, b, distance, max_cost).map_err(|e| e.to_string())?
        );
    } else {
        println!("{}", format_distance(distance, max_cost));
    }
    Ok(())
}
