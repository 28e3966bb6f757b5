use strum::Display;

use super::profile::{EnvironmentalProfile, FamilyEnvironment};
use super::traits::{normalize, TraitCode, TraitScores};

pub const HIGH_EXTRAVERSION_THRESHOLD: f64 = 0.7;
pub const LOW_EMPATHY_THRESHOLD: f64 = 0.3;
pub const HIGH_THINKING_THRESHOLD: f64 = 0.8;
pub const MODERATE_EMPATHY_THRESHOLD: f64 = 0.4;

pub const RISK_DOMINANT_EXTRAVERT: f64 = 0.6;
pub const RISK_COLD_THINKER: f64 = 0.3;
pub const RISK_STRICT_FAMILY: f64 = 0.2;
pub const RISK_NO_SIBLINGS: f64 = 0.1;

pub const COARSE_RISK_EXTRAVERT: f64 = 0.4;
pub const COARSE_RISK_BASELINE: f64 = 0.1;
pub const COARSE_RISK_STRICT_FAMILY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RiskTier {
    #[strum(serialize = "LOW")]
    Low,
    #[strum(serialize = "MEDIUM")]
    Medium,
    #[strum(serialize = "HIGH")]
    High,
}

impl RiskTier {
    pub const HIGH_THRESHOLD: f64 = 0.7;
    pub const MEDIUM_THRESHOLD: f64 = 0.4;

    /// Both thresholds are exclusive: 0.7 is still medium, 0.4 still low.
    pub fn from_score(risk: f64) -> Self {
        if risk > Self::HIGH_THRESHOLD {
            RiskTier::High
        } else if risk > Self::MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RiskRule {
    #[strum(serialize = "canonical")]
    Canonical,
    #[strum(serialize = "coarse")]
    Coarse,
}

impl RiskRule {
    pub fn apply(&self, scores: &TraitScores, environment: &EnvironmentalProfile) -> f64 {
        match self {
            Self::Canonical => canonical_bullying_risk(scores, environment),
            Self::Coarse => coarse_bullying_risk(scores, environment),
        }
    }
}

pub fn canonical_bullying_risk(scores: &TraitScores, environment: &EnvironmentalProfile) -> f64 {
    let extraversion = scores.score(TraitCode::E);
    let thinking = scores.score(TraitCode::T);
    let feeling = scores.score(TraitCode::F);

    let mut risk = 0.0;

    if extraversion > HIGH_EXTRAVERSION_THRESHOLD && feeling < LOW_EMPATHY_THRESHOLD {
        risk += RISK_DOMINANT_EXTRAVERT;
    }

    if thinking > HIGH_THINKING_THRESHOLD && feeling < MODERATE_EMPATHY_THRESHOLD {
        risk += RISK_COLD_THINKER;
    }

    if environment.family() == FamilyEnvironment::Strict {
        risk += RISK_STRICT_FAMILY;
    }

    if environment.has_siblings == Some(false) {
        risk += RISK_NO_SIBLINGS;
    }

    normalize(risk)
}

pub fn coarse_bullying_risk(scores: &TraitScores, environment: &EnvironmentalProfile) -> f64 {
    let mut risk = if scores.score(TraitCode::E) > HIGH_EXTRAVERSION_THRESHOLD {
        COARSE_RISK_EXTRAVERT
    } else {
        COARSE_RISK_BASELINE
    };

    if environment.family() == FamilyEnvironment::Strict {
        risk += COARSE_RISK_STRICT_FAMILY;
    }

    normalize(risk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(family: &str, siblings: Option<bool>) -> EnvironmentalProfile {
        EnvironmentalProfile {
            family_environment: Some(family.to_string()),
            has_siblings: siblings,
            ..Default::default()
        }
    }

    #[test]
    fn test_risk_tiers() {
        assert_eq!(RiskTier::from_score(0.71), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.7), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.41), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.4), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
    }

    #[test]
    fn test_canonical_clamps_full_accumulation() {
        let scores = TraitScores::from_primaries(0.95, 0.5, 0.95, 0.5);
        let risk = canonical_bullying_risk(&scores, &env("STRICT", Some(false)));
        assert_eq!(risk, 1.0);
    }

    #[test]
    fn test_canonical_thresholds_are_strict() {
        let neutral = env("NEUTRAL", None);

        // E exactly at 0.7 does not trigger the extravert rule
        let scores = TraitScores::from_primaries(0.7, 0.5, 0.75, 0.5);
        assert_eq!(canonical_bullying_risk(&scores, &neutral), 0.0);

        // F at the 0.3 boundary does not trigger it either
        let scores = TraitScores::from_primaries(0.8, 0.5, 0.7, 0.5);
        assert!(scores.score(TraitCode::F) >= LOW_EMPATHY_THRESHOLD);
        assert_eq!(canonical_bullying_risk(&scores, &neutral), 0.0);

        let scores = TraitScores::from_primaries(0.8, 0.5, 0.75, 0.5);
        assert!((canonical_bullying_risk(&scores, &neutral) - 0.6).abs() < 1e-9);

        // T exactly at 0.8 does not trigger the cold-thinker rule
        let scores = TraitScores::from_primaries(0.5, 0.5, 0.8, 0.5);
        assert_eq!(canonical_bullying_risk(&scores, &neutral), 0.0);

        let scores = TraitScores::from_primaries(0.5, 0.5, 0.85, 0.5);
        assert!((canonical_bullying_risk(&scores, &neutral) - 0.3).abs() < 1e-9);

        // both at once: only the extravert rule fires while T sits on its threshold
        let scores = TraitScores::from_primaries(0.8, 0.5, 0.8, 0.5);
        assert!((canonical_bullying_risk(&scores, &neutral) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_cold_thinker_empathy_bound() {
        // F < 0.4 is implied once T > 0.8, so F can never sit at 0.4 while T qualifies
        for thinking in [0.81, 0.9, 1.0] {
            let scores = TraitScores::from_primaries(0.5, 0.5, thinking, 0.5);
            assert!(scores.score(TraitCode::F) < MODERATE_EMPATHY_THRESHOLD);
            assert!((canonical_bullying_risk(&scores, &env("NEUTRAL", None)) - 0.3).abs() < 1e-9);
        }

        // F exactly at 0.4 with T at 0.6 leaves the rule off
        let scores = TraitScores::from_primaries(0.5, 0.5, 0.6, 0.5);
        assert_eq!(canonical_bullying_risk(&scores, &env("NEUTRAL", None)), 0.0);
    }

    #[test]
    fn test_canonical_environment_aggravators() {
        let scores = TraitScores::from_primaries(0.5, 0.5, 0.5, 0.5);
        let strict = canonical_bullying_risk(&scores, &env("strict", None));
        assert!((strict - 0.2).abs() < 1e-9);

        let only_child = canonical_bullying_risk(&scores, &env("SUPPORTIVE", Some(false)));
        assert!((only_child - 0.1).abs() < 1e-9);

        let unknown_siblings = canonical_bullying_risk(&scores, &env("SUPPORTIVE", None));
        assert_eq!(unknown_siblings, 0.0);
    }

    #[test]
    fn test_coarse_rule() {
        let outgoing = TraitScores::from_primaries(0.8, 0.5, 0.5, 0.5);
        let quiet = TraitScores::from_primaries(0.6, 0.5, 0.5, 0.5);

        assert!((coarse_bullying_risk(&outgoing, &env("NEUTRAL", None)) - 0.4).abs() < 1e-9);
        assert!((coarse_bullying_risk(&quiet, &env("NEUTRAL", None)) - 0.1).abs() < 1e-9);
        assert!((coarse_bullying_risk(&outgoing, &env("STRICT", None)) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_rule_dispatch() {
        let scores = TraitScores::from_primaries(0.8, 0.5, 0.5, 0.5);
        let environment = env("NEUTRAL", Some(false));
        assert_eq!(
            RiskRule::Coarse.apply(&scores, &environment),
            coarse_bullying_risk(&scores, &environment)
        );
        assert_eq!(
            RiskRule::Canonical.apply(&scores, &environment),
            canonical_bullying_risk(&scores, &environment)
        );
    }
}
