pub mod analysis;
pub mod blend;
mod error;
mod mbti_type;
mod profile;
mod registry;
pub mod risk;
mod result;
pub mod strategy;
mod traits;

pub use error::{PredictionError, ValidationError};
pub use mbti_type::MbtiType;
pub use profile::{
    EnvironmentalProfile, FamilyEnvironment, GeneticProfile, GeneticTerms, Parent, SchoolType,
};
pub use registry::{find_strategy, predict, strategies, strategy_names};
pub use result::PredictionResult;
pub use risk::{RiskRule, RiskTier};
pub use strategy::{
    BehavioralStrategy, GeneticStrategy, PredictionStrategy, BEHAVIORAL_STRATEGY,
    GENETIC_STRATEGY,
};
pub use traits::{ConfidenceRule, ConfidenceTier, Dichotomy, TraitCode, TraitScores};
