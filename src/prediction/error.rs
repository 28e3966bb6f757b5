use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("birthOrder must be a positive integer, got {0}")]
    InvalidBirthOrder(i32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("strategy not found: {0}")]
    UnknownStrategy(String),
}
