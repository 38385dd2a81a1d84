//! Error types for dataframe utilities.

/// Errors that can occur converting between frames and engine types.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// A required column is absent.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A column has an unusable data type.
    #[error("column {column} has invalid type: expected {expected}")]
    InvalidColumnType {
        /// Offending column.
        column: String,
        /// Expected type description.
        expected: &'static str,
    },

    /// A key column contains a null.
    #[error("null value in column {column} at row {row}")]
    NullValue {
        /// Offending column.
        column: String,
        /// Offending row index.
        row: usize,
    },

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
