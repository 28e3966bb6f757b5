use std::sync::LazyLock;

use super::error::PredictionError;
use super::profile::{EnvironmentalProfile, GeneticProfile};
use super::result::PredictionResult;
use super::strategy::{BehavioralStrategy, GeneticStrategy, PredictionStrategy};

static STRATEGIES: LazyLock<Vec<Box<dyn PredictionStrategy>>> =
    LazyLock::new(|| vec![Box::new(GeneticStrategy), Box::new(BehavioralStrategy)]);

pub fn strategies() -> impl Iterator<Item = &'static dyn PredictionStrategy> {
    STRATEGIES.iter().map(|s| s.as_ref())
}

pub fn strategy_names() -> Vec<&'static str> {
    strategies().map(|s| s.name()).collect()
}

/// Exact, case-sensitive lookup.
pub fn find_strategy(name: &str) -> Result<&'static dyn PredictionStrategy, PredictionError> {
    strategies()
        .find(|s| s.name() == name)
        .ok_or_else(|| PredictionError::UnknownStrategy(name.to_string()))
}

pub fn predict(
    strategy_name: &str,
    genetic: &GeneticProfile,
    environment: &EnvironmentalProfile,
) -> Result<PredictionResult, PredictionError> {
    let strategy = find_strategy(strategy_name)?;
    let result = strategy.predict(genetic, environment)?;

    tracing::debug!(
        strategy = strategy.name(),
        mbti_type = %result.mbti_type(),
        "prediction complete"
    );

    Ok(result)
}
