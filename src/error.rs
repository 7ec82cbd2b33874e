//! Error types for the parameter layer
//!
//! The projection engine itself never fails; these errors only come from
//! validating user input and loading scenario files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown scenario kind: {0}")]
    UnknownKind(String),

    #[error("Missing field `{field}` for {kind} scenario")]
    MissingField { kind: String, field: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalculatorError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
