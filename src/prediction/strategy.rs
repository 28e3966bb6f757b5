use super::analysis::render_analysis;
use super::blend::blend_all;
use super::error::ValidationError;
use super::profile::{EnvironmentalProfile, FamilyEnvironment, GeneticProfile, SchoolType};
use super::result::PredictionResult;
use super::risk::RiskRule;
use super::traits::{normalize, ConfidenceRule, Dichotomy, TraitScores, NEUTRAL_SCORE};

pub const GENETIC_STRATEGY: &str = "GENETIC_MBTI_STRATEGY";
pub const BEHAVIORAL_STRATEGY: &str = "BEHAVIORAL_MBTI_STRATEGY";

pub const BEHAVIORAL_ACTIVE_SCHOOL: f64 = 0.3;
pub const BEHAVIORAL_FRIENDS_THRESHOLD: f64 = 0.7;
pub const BEHAVIORAL_FRIENDS_BONUS: f64 = 0.2;
pub const BEHAVIORAL_INTUITION: f64 = 0.6;
pub const BEHAVIORAL_THINKING_SCALE: f64 = 0.8;
pub const BEHAVIORAL_STRICT_JUDGING: f64 = 0.4;

/// A named way of turning two profiles into a [`PredictionResult`].
///
/// Implementations are pure: no shared state, no clock, no randomness. All
/// validation happens before any scoring, so a failed call never yields a partial
/// result.
pub trait PredictionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn confidence_rule(&self) -> ConfidenceRule;

    fn risk_rule(&self) -> RiskRule;

    fn predict(
        &self,
        genetic: &GeneticProfile,
        environment: &EnvironmentalProfile,
    ) -> Result<PredictionResult, ValidationError>;
}

fn assemble(
    strategy: &dyn PredictionStrategy,
    scores: TraitScores,
    environment: &EnvironmentalProfile,
) -> PredictionResult {
    let mbti_type = scores.mbti_type();
    let confidence = strategy.confidence_rule().apply(&scores);
    let risk = strategy.risk_rule().apply(&scores, environment);
    let analysis = render_analysis(mbti_type, &scores, confidence, risk);

    PredictionResult::new(
        mbti_type,
        scores,
        confidence,
        risk,
        analysis,
        strategy.name(),
    )
}

/// Per-trait genetic/environmental blend with environment-sensitive weights.
/// Requires all eight parent values.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneticStrategy;

impl PredictionStrategy for GeneticStrategy {
    fn name(&self) -> &'static str {
        GENETIC_STRATEGY
    }

    fn description(&self) -> &'static str {
        "Genetic MBTI prediction (40% heredity + 60% environment for extraversion, per-trait weights elsewhere)"
    }

    fn confidence_rule(&self) -> ConfidenceRule {
        ConfidenceRule::AverageDeviation
    }

    fn risk_rule(&self) -> RiskRule {
        RiskRule::Canonical
    }

    fn predict(
        &self,
        genetic: &GeneticProfile,
        environment: &EnvironmentalProfile,
    ) -> Result<PredictionResult, ValidationError> {
        genetic.validate()?;
        environment.validate()?;
        let terms = genetic.genetic_terms()?;

        let scores = blend_all(&terms, environment);
        Ok(assemble(self, scores, environment))
    }
}

/// Environment-dominant approximation. Only the parents' thinking values are read;
/// intuition is a fixed estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehavioralStrategy;

impl BehavioralStrategy {
    fn extraversion(environment: &EnvironmentalProfile) -> f64 {
        let mut base = NEUTRAL_SCORE;
        if environment.school() == SchoolType::Active {
            base += BEHAVIORAL_ACTIVE_SCHOOL;
        }
        if environment
            .friends_influence
            .is_some_and(|f| f > BEHAVIORAL_FRIENDS_THRESHOLD)
        {
            base += BEHAVIORAL_FRIENDS_BONUS;
        }
        normalize(base)
    }

    fn thinking(genetic_thinking: f64) -> f64 {
        normalize(genetic_thinking * BEHAVIORAL_THINKING_SCALE)
    }

    fn judging(environment: &EnvironmentalProfile) -> f64 {
        let mut base = NEUTRAL_SCORE;
        if environment.family() == FamilyEnvironment::Strict {
            base += BEHAVIORAL_STRICT_JUDGING;
        }
        normalize(base)
    }
}

impl PredictionStrategy for BehavioralStrategy {
    fn name(&self) -> &'static str {
        BEHAVIORAL_STRATEGY
    }

    fn description(&self) -> &'static str {
        "Behavioral analysis based on observed interaction patterns"
    }

    fn confidence_rule(&self) -> ConfidenceRule {
        ConfidenceRule::MaxDeviation
    }

    fn risk_rule(&self) -> RiskRule {
        RiskRule::Coarse
    }

    fn predict(
        &self,
        genetic: &GeneticProfile,
        environment: &EnvironmentalProfile,
    ) -> Result<PredictionResult, ValidationError> {
        genetic.validate()?;
        environment.validate()?;
        let genetic_thinking = genetic.genetic_term(Dichotomy::Decisions)?;

        let scores = TraitScores::from_primaries(
            Self::extraversion(environment),
            BEHAVIORAL_INTUITION,
            Self::thinking(genetic_thinking),
            Self::judging(environment),
        );
        Ok(assemble(self, scores, environment))
    }
}
