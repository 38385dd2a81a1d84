//! Fund scoring CLI tool.
//!
//! Scores a CSV of fund observations for one as-of date. The CSV must
//! carry `fund_id` and `peer_group` string columns; every other column
//! is treated as a metric.
//!
//! Usage: `score OBSERVATIONS.csv --as-of YYYY-MM-DD [--group ID]
//! [--lower-is-better a,b] [--weight metric=w]`
//!
//! Example: `score funds.csv --as-of 2024-03-31 --lower-is-better expense_ratio --weight ret_1y=0.7`

use std::env;

use chrono::NaiveDate;
use peerscore::{
    engine::{ScoringEngine, StaticUniverse},
    primitives::{Direction, MetricCatalog, MetricDefinition, PeerGroupId},
    traits::FundScorer,
    utils::{
        FUND_ID_COLUMN, PEER_GROUP_COLUMN, observations_from_frame, run_to_frame,
        sanitize_metrics,
    },
};
use polars::prelude::*;
use tracing_subscriber::EnvFilter;

/// Weight applied to metrics without an explicit `--weight`.
const DEFAULT_WEIGHT: f64 = 1.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: score OBSERVATIONS.csv --as-of YYYY-MM-DD [--group ID]");
        eprintln!("             [--lower-is-better a,b] [--weight metric=w]");
        eprintln!("Example: score funds.csv --as-of 2024-03-31 --lower-is-better expense_ratio");
        std::process::exit(1);
    }

    let path = args[1].clone();
    let as_of = parse_as_of(&args)?;
    let group_filter = parse_flag_value(&args, "--group");
    let lower_is_better = parse_lower_is_better(&args);
    let weights = parse_weights(&args)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.clone().into()))?
        .finish()?;

    let metric_cols: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| name != FUND_ID_COLUMN && name != PEER_GROUP_COLUMN)
        .collect();
    let metric_refs: Vec<&str> = metric_cols.iter().map(String::as_str).collect();

    let df = sanitize_metrics(&df, &metric_refs)?;
    let observations = observations_from_frame(&df, as_of)?;

    let definitions: Vec<MetricDefinition> = metric_cols
        .iter()
        .map(|name| {
            let direction = if lower_is_better.iter().any(|m| m == name) {
                Direction::LowerIsBetter
            } else {
                Direction::HigherIsBetter
            };
            let weight =
                weights.iter().find(|(m, _)| m == name).map_or(DEFAULT_WEIGHT, |(_, w)| *w);
            MetricDefinition::new(name.as_str(), direction, weight)
        })
        .collect();
    let catalog = MetricCatalog::new(definitions)?;

    println!(
        "\nScoring {} observation(s) from {} as of {}...\n",
        observations.len(),
        path,
        as_of
    );

    let universe = StaticUniverse::from_observations(observations);
    let engine = ScoringEngine::new(universe.clone(), universe, catalog);

    let filter: Option<Vec<PeerGroupId>> =
        group_filter.map(|group| vec![PeerGroupId::from(group)]);
    let run = engine.score_as_of(as_of, filter.as_deref())?;

    let table = run_to_frame(&run)?;
    println!("{table}");

    if !run.skipped.is_empty() {
        println!("\nSkipped {} fund(s):", run.skipped.len());
        for skip in &run.skipped {
            println!("  {} ({}): {}", skip.fund_id, skip.group_id, skip.reason);
        }
    }
    if run.degenerate_metrics > 0 {
        println!(
            "\n{} group metric(s) fell back to robust statistics or were skipped.",
            run.degenerate_metrics
        );
    }

    Ok(())
}

fn parse_as_of(args: &[String]) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    let value = parse_flag_value(args, "--as-of").ok_or("missing required --as-of YYYY-MM-DD")?;
    Ok(NaiveDate::parse_from_str(&value, "%Y-%m-%d")?)
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_lower_is_better(args: &[String]) -> Vec<String> {
    parse_flag_value(args, "--lower-is-better")
        .map(|list| list.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default()
}

fn parse_weights(args: &[String]) -> Result<Vec<(String, f64)>, Box<dyn std::error::Error>> {
    let mut weights = Vec::new();
    for i in 0..args.len() {
        if args[i] == "--weight" && i + 1 < args.len() {
            let (metric, value) = args[i + 1]
                .split_once('=')
                .ok_or_else(|| format!("invalid --weight {}, expected metric=w", args[i + 1]))?;
            weights.push((metric.to_string(), value.parse::<f64>()?));
        }
    }
    Ok(weights)
}
