//! Error types for planner-core.

use thiserror::Error;

/// Result type alias using PlanError.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised while validating plan or schedule requests.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("total hours must be positive, got {0}")]
    NonPositiveTotalHours(f64),

    #[error("hours per day must be at least 0.01, got {0}")]
    NonPositiveDailyHours(f64),
}

/// Errors reported by history sources and plan sinks.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("write rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let error = PlanError::MissingField("classNum");
        assert_eq!(error.to_string(), "missing required field: classNum");
    }

    #[test]
    fn display_non_positive_hours() {
        let error = PlanError::NonPositiveTotalHours(-2.0);
        assert_eq!(error.to_string(), "total hours must be positive, got -2");
    }
}
