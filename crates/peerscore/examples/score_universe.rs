//! Example: score a synthetic fund universe end to end.
//!
//! Builds a two-group universe with literal metric values, runs a bulk
//! scoring pass, then recomputes one fund through the single-fund
//! preview path.
//!
//! Run with: `cargo run --example score_universe --features full`

use peerscore::engine::{ScoringEngine, StaticUniverse};
use peerscore::primitives::{Date, Direction, FundObservation, MetricCatalog, MetricDefinition};
use peerscore::traits::FundScorer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let as_of = Date::from_ymd_opt(2024, 3, 31).ok_or("invalid date")?;

    let catalog = MetricCatalog::new(vec![
        MetricDefinition::new("ret_1y", Direction::HigherIsBetter, 0.5),
        MetricDefinition::new("sharpe", Direction::HigherIsBetter, 0.3),
        MetricDefinition::new("expense", Direction::LowerIsBetter, 0.2),
    ])?;

    let observations = build_observations(as_of);
    println!("Universe: {} funds across 2 peer groups, as of {as_of}", observations.len());

    let universe = StaticUniverse::from_observations(observations);
    let engine = ScoringEngine::new(universe.clone(), universe, catalog);

    // Bulk pass over the whole universe.
    let run = engine.score_as_of(as_of, None)?;

    println!("\n{:<8} {:<14} {:>10} {:>12}", "Fund", "Peer group", "Score", "Percentile");
    println!("{:-<8} {:-<14} {:->10} {:->12}", "", "", "", "");
    for result in &run.results {
        println!(
            "{:<8} {:<14} {:>10.2} {:>12.1}",
            result.fund_id, result.group_id, result.composite_score, result.percentile
        );
    }

    for skip in &run.skipped {
        println!("skipped {} ({}): {}", skip.fund_id, skip.group_id, skip.reason);
    }

    // Preview path: one fund, same full-group computation.
    let preview = engine.score_single_fund(as_of, &"EQ3".into())?;
    println!(
        "\nPreview EQ3: score {:.2}, percentile {:.1}",
        preview.composite_score, preview.percentile
    );
    for breakdown in &preview.breakdown {
        println!(
            "  {:<10} raw {:>8.3}  z {:>7.3}  winsorized: {}  robust: {}",
            breakdown.metric_id,
            breakdown.raw_value,
            breakdown.z_score,
            breakdown.winsorized,
            breakdown.used_robust_fallback
        );
    }

    Ok(())
}

fn build_observations(as_of: Date) -> Vec<FundObservation> {
    let equity: [(&str, f64, f64, f64); 7] = [
        ("EQ1", 0.142, 1.10, 0.65),
        ("EQ2", 0.083, 0.72, 0.45),
        ("EQ3", 0.215, 1.45, 0.95),
        ("EQ4", -0.021, 0.15, 0.30),
        ("EQ5", 0.056, 0.58, 0.52),
        ("EQ6", 0.118, 0.96, 0.71),
        ("EQ7", 0.034, 0.41, 0.38),
    ];
    let bond: [(&str, f64, f64, f64); 4] = [
        ("BD1", 0.044, 0.88, 0.25),
        ("BD2", 0.028, 0.52, 0.40),
        ("BD3", 0.061, 1.02, 0.35),
        ("BD4", 0.015, 0.30, 0.20),
    ];

    let mut observations = Vec::new();
    for (fund, ret, sharpe, expense) in equity {
        observations.push(
            FundObservation::new(fund, "equity-large", as_of)
                .with_metric("ret_1y", ret)
                .with_metric("sharpe", sharpe)
                .with_metric("expense", expense),
        );
    }
    for (fund, ret, sharpe, expense) in bond {
        observations.push(
            FundObservation::new(fund, "bond-core", as_of)
                .with_metric("ret_1y", ret)
                .with_metric("sharpe", sharpe)
                .with_metric("expense", expense),
        );
    }
    // One fund with a sparse snapshot: no Sharpe available.
    observations.push(
        FundObservation::new("EQ8", "equity-large", as_of)
            .with_metric("ret_1y", 0.091)
            .with_metric("sharpe", None)
            .with_metric("expense", 0.55),
    );

    observations
}
