//! Metric column sanitization.

use polars::prelude::*;

use crate::UtilsError;

/// Sanitize imported metric columns.
///
/// Casts each metric column to `Float64` and replaces NaN and infinite
/// values with null. Missing means excluded from scoring, so no value is
/// ever imputed here; downstream statistics skip nulls per metric.
///
/// # Errors
/// Returns `UtilsError::MissingColumn` for an absent column, or a
/// wrapped polars error for an uncastable one.
pub fn sanitize_metrics(df: &DataFrame, metric_cols: &[&str]) -> Result<DataFrame, UtilsError> {
    let mut out = df.clone();
    for &name in metric_cols {
        let column = out
            .column(name)
            .map_err(|_| UtilsError::MissingColumn(name.to_string()))?
            .cast(&DataType::Float64)?;
        let values = column.f64()?;
        let cleaned: Float64Chunked =
            values.into_iter().map(|opt| opt.filter(|v| v.is_finite())).collect();
        out.with_column(cleaned.with_name(name.into()).into_series())?;
    }
    Ok(out)
}
