pub mod input;
pub mod logs;

pub use input::{load_request, resolve_strategy, PredictionRequest, STRATEGY_ENV_VAR};
pub use logs::{
    log_comparison_header, log_comparison_row, log_init, log_input_error, log_prediction_error,
    PredictionAssessment,
};
