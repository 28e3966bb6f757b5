//! Genetic/environmental blend for the four primary traits.
//!
//! Each primary is `genetic_weight * G + environmental_weight * E`, where `G` is the
//! parents' average and `E` starts at 0.5 and is shifted by the environment. Both
//! terms are clamped to [0, 1] before weighting and the result is clamped again.

use super::profile::{
    EnvironmentalProfile, FamilyEnvironment, GeneticTerms, SchoolType, BIRTH_ORDER_FIRSTBORN,
};
use super::traits::{normalize, TraitScores, NEUTRAL_SCORE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub genetic: f64,
    pub environmental: f64,
}

pub const EXTRAVERSION_WEIGHTS: BlendWeights = BlendWeights {
    genetic: 0.4,
    environmental: 0.6,
};
pub const INTUITION_WEIGHTS: BlendWeights = BlendWeights {
    genetic: 0.7,
    environmental: 0.3,
};
pub const THINKING_WEIGHTS: BlendWeights = BlendWeights {
    genetic: 0.6,
    environmental: 0.4,
};
pub const JUDGING_WEIGHTS: BlendWeights = BlendWeights {
    genetic: 0.5,
    environmental: 0.5,
};

pub const BONUS_FIRSTBORN: f64 = 0.15;
pub const PENALTY_LATER_BORN: f64 = 0.1;
pub const LATER_BORN_FROM: i32 = 3;
pub const FRIENDS_INFLUENCE_SCALE: f64 = 0.2;
pub const BONUS_SIBLINGS: f64 = 0.1;

pub const SCHOOL_ACTIVE_EXTRAVERSION: f64 = 0.25;
pub const SCHOOL_STRICT_EXTRAVERSION: f64 = -0.15;
pub const SCHOOL_CREATIVE_EXTRAVERSION: f64 = 0.10;

pub const SCHOOL_CREATIVE_INTUITION: f64 = 0.2;
pub const STRICT_FAMILY_THINKING: f64 = 0.15;
pub const STRICT_FAMILY_JUDGING: f64 = 0.25;
pub const SUPPORTIVE_FAMILY_JUDGING: f64 = -0.1;

pub fn blend(genetic: f64, environmental: f64, weights: BlendWeights) -> f64 {
    normalize(normalize(genetic) * weights.genetic + normalize(environmental) * weights.environmental)
}

pub fn school_extraversion_impact(school: SchoolType) -> f64 {
    match school {
        SchoolType::Active => SCHOOL_ACTIVE_EXTRAVERSION,
        SchoolType::Strict => SCHOOL_STRICT_EXTRAVERSION,
        SchoolType::Creative => SCHOOL_CREATIVE_EXTRAVERSION,
        SchoolType::Neutral => 0.0,
    }
}

pub fn environmental_extraversion(environment: &EnvironmentalProfile) -> f64 {
    let mut base = NEUTRAL_SCORE;

    match environment.birth_order {
        Some(BIRTH_ORDER_FIRSTBORN) => base += BONUS_FIRSTBORN,
        Some(order) if order >= LATER_BORN_FROM => base -= PENALTY_LATER_BORN,
        _ => {}
    }

    base += school_extraversion_impact(environment.extraversion_school());

    if let Some(influence) = environment.friends_influence {
        base += influence * FRIENDS_INFLUENCE_SCALE;
    }

    if environment.has_siblings == Some(true) {
        base += BONUS_SIBLINGS;
    }

    normalize(base)
}

pub fn environmental_intuition(environment: &EnvironmentalProfile) -> f64 {
    let mut base = NEUTRAL_SCORE;
    if environment.school() == SchoolType::Creative {
        base += SCHOOL_CREATIVE_INTUITION;
    }
    normalize(base)
}

pub fn environmental_thinking(environment: &EnvironmentalProfile) -> f64 {
    let mut base = NEUTRAL_SCORE;
    if environment.family() == FamilyEnvironment::Strict {
        base += STRICT_FAMILY_THINKING;
    }
    normalize(base)
}

pub fn environmental_judging(environment: &EnvironmentalProfile) -> f64 {
    let base = match environment.family() {
        FamilyEnvironment::Strict => NEUTRAL_SCORE + STRICT_FAMILY_JUDGING,
        FamilyEnvironment::Supportive => NEUTRAL_SCORE + SUPPORTIVE_FAMILY_JUDGING,
        FamilyEnvironment::Neutral => NEUTRAL_SCORE,
    };
    normalize(base)
}

pub fn blend_extraversion(genetic: f64, environment: &EnvironmentalProfile) -> f64 {
    blend(genetic, environmental_extraversion(environment), EXTRAVERSION_WEIGHTS)
}

pub fn blend_intuition(genetic: f64, environment: &EnvironmentalProfile) -> f64 {
    blend(genetic, environmental_intuition(environment), INTUITION_WEIGHTS)
}

pub fn blend_thinking(genetic: f64, environment: &EnvironmentalProfile) -> f64 {
    blend(genetic, environmental_thinking(environment), THINKING_WEIGHTS)
}

pub fn blend_judging(genetic: f64, environment: &EnvironmentalProfile) -> f64 {
    blend(genetic, environmental_judging(environment), JUDGING_WEIGHTS)
}

pub fn blend_all(terms: &GeneticTerms, environment: &EnvironmentalProfile) -> TraitScores {
    TraitScores::from_primaries(
        blend_extraversion(terms.extraversion, environment),
        blend_intuition(terms.intuition, environment),
        blend_thinking(terms.thinking, environment),
        blend_judging(terms.judging, environment),
    )
}
