use serde::Serialize;

use super::mbti_type::MbtiType;
use super::traits::TraitScores;

/// Outcome of one prediction. Built once by a strategy and handed to the caller as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    mbti_type: MbtiType,
    trait_scores: TraitScores,
    confidence: f64,
    bullying_risk: f64,
    analysis: String,
    strategy_used: &'static str,
}

impl PredictionResult {
    pub(crate) fn new(
        mbti_type: MbtiType,
        trait_scores: TraitScores,
        confidence: f64,
        bullying_risk: f64,
        analysis: String,
        strategy_used: &'static str,
    ) -> Self {
        Self {
            mbti_type,
            trait_scores,
            confidence,
            bullying_risk,
            analysis,
            strategy_used,
        }
    }

    pub fn mbti_type(&self) -> MbtiType {
        self.mbti_type
    }

    pub fn trait_scores(&self) -> &TraitScores {
        &self.trait_scores
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn bullying_risk(&self) -> f64 {
        self.bullying_risk
    }

    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    pub fn strategy_used(&self) -> &'static str {
        self.strategy_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let scores = TraitScores::from_primaries(0.75, 0.5, 0.25, 1.0);
        let result = PredictionResult::new(
            MbtiType::Enfj,
            scores,
            0.5,
            0.1,
            "text".to_string(),
            "GENETIC_MBTI_STRATEGY",
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["mbtiType"], "ENFJ");
        assert_eq!(json["traitScores"]["E"], 0.75);
        assert_eq!(json["traitScores"]["I"], 0.25);
        assert_eq!(json["confidence"], 0.5);
        assert_eq!(json["bullyingRisk"], 0.1);
        assert_eq!(json["analysis"], "text");
        assert_eq!(json["strategyUsed"], "GENETIC_MBTI_STRATEGY");
    }
}
