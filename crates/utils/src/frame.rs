//! Conversions between dataframes and engine types.

use polars::prelude::*;

use peerscore_primitives::{Date, FundObservation, MetricId, ScoreRun};

use crate::UtilsError;

/// Name of the fund identifier column in observation frames.
pub const FUND_ID_COLUMN: &str = "fund_id";

/// Name of the peer group column in observation frames.
pub const PEER_GROUP_COLUMN: &str = "peer_group";

/// Convert an observation frame into engine observations.
///
/// The frame must carry string `fund_id` and `peer_group` columns; every
/// other column is treated as a `Float64` metric column (run
/// [`crate::sanitize_metrics`] first for raw imports). Nulls stay nulls:
/// a missing metric is carried as unavailable, never as zero.
///
/// # Errors
/// Returns `UtilsError` for absent key columns, non-string key columns,
/// a null fund or group id, or a non-float metric column.
pub fn observations_from_frame(
    df: &DataFrame,
    as_of: Date,
) -> Result<Vec<FundObservation>, UtilsError> {
    let fund_ids = df
        .column(FUND_ID_COLUMN)
        .map_err(|_| UtilsError::MissingColumn(FUND_ID_COLUMN.to_string()))?
        .str()
        .map_err(|_| UtilsError::InvalidColumnType {
            column: FUND_ID_COLUMN.to_string(),
            expected: "str",
        })?;
    let group_ids = df
        .column(PEER_GROUP_COLUMN)
        .map_err(|_| UtilsError::MissingColumn(PEER_GROUP_COLUMN.to_string()))?
        .str()
        .map_err(|_| UtilsError::InvalidColumnType {
            column: PEER_GROUP_COLUMN.to_string(),
            expected: "str",
        })?;

    let mut metric_columns = Vec::new();
    for column in df.get_columns() {
        let name = column.name().as_str();
        if name == FUND_ID_COLUMN || name == PEER_GROUP_COLUMN {
            continue;
        }
        let values = column.f64().map_err(|_| UtilsError::InvalidColumnType {
            column: name.to_string(),
            expected: "f64",
        })?;
        metric_columns.push((MetricId::from(name), values));
    }

    let mut observations = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let fund_id = fund_ids.get(row).ok_or_else(|| UtilsError::NullValue {
            column: FUND_ID_COLUMN.to_string(),
            row,
        })?;
        let group_id = group_ids.get(row).ok_or_else(|| UtilsError::NullValue {
            column: PEER_GROUP_COLUMN.to_string(),
            row,
        })?;

        let mut obs = FundObservation::new(fund_id, group_id, as_of);
        for (metric_id, values) in &metric_columns {
            obs.set_metric(metric_id.clone(), values.get(row));
        }
        observations.push(obs);
    }

    Ok(observations)
}

/// Render a score run as a frame for table views and export.
///
/// Columns: `as_of`, `fund_id`, `peer_group`, `composite_score`,
/// `percentile`, one row per scored fund in run order.
///
/// # Errors
/// Returns a wrapped polars error if frame construction fails.
pub fn run_to_frame(run: &ScoreRun) -> Result<DataFrame, UtilsError> {
    let n = run.len();
    let mut dates: Vec<Date> = Vec::with_capacity(n);
    let mut funds: Vec<String> = Vec::with_capacity(n);
    let mut groups: Vec<String> = Vec::with_capacity(n);
    let mut composites: Vec<f64> = Vec::with_capacity(n);
    let mut percentiles: Vec<f64> = Vec::with_capacity(n);

    for result in &run.results {
        dates.push(result.as_of);
        funds.push(result.fund_id.to_string());
        groups.push(result.group_id.to_string());
        composites.push(result.composite_score);
        percentiles.push(result.percentile);
    }

    let df = DataFrame::new(vec![
        Column::new("as_of".into(), dates),
        Column::new(FUND_ID_COLUMN.into(), funds),
        Column::new(PEER_GROUP_COLUMN.into(), groups),
        Column::new("composite_score".into(), composites),
        Column::new("percentile".into(), percentiles),
    ])?;

    Ok(df)
}
