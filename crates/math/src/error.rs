//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Invalid winsorization clip bound.
    #[error("invalid clip bound: {0} (must be finite and > 0)")]
    InvalidClipBound(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InvalidClipBound(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
