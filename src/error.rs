use thiserror::Error;

/// Keyword engine error types.
///
/// The matching core itself is infallible: degenerate inputs (empty
/// patterns, content with no occurrences, lookups of absent words) all have
/// defined silent behavior. Errors only arise from configuration.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_matchable() {
        let err = EngineError::InvalidBatchSize(0);
        assert!(matches!(err, EngineError::InvalidBatchSize(0)));
    }

    #[test]
    fn test_error_display_includes_value() {
        let display = format!("{}", EngineError::InvalidBatchSize(0));
        assert!(display.contains("0"), "got: {}", display);
    }
}
