use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

use crate::prediction::{EnvironmentalProfile, GeneticProfile};

pub const STRATEGY_ENV_VAR: &str = "MBTI_STRATEGY";

/// Request body as accepted by the prediction endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub genetic: GeneticProfile,
    pub environment: EnvironmentalProfile,
    #[serde(default)]
    pub strategy: Option<String>,
}

pub fn parse_request(json: &str) -> Result<PredictionRequest> {
    serde_json::from_str(json).context("invalid prediction request")
}

/// Reads a request from a file path, or from stdin when `source` is `-`.
pub fn load_request(source: &str) -> Result<PredictionRequest> {
    let content = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?
    };
    parse_request(&content)
}

/// Flag first, then the request body, then `MBTI_STRATEGY`, then the configured default.
pub fn resolve_strategy(
    flag: Option<&str>,
    request: &PredictionRequest,
    env_override: Option<String>,
    default: &str,
) -> String {
    flag.map(str::to_string)
        .or_else(|| request.strategy.clone())
        .or(env_override)
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "genetic": {
            "fatherExtraversion": 0.9, "fatherIntuition": 0.4,
            "fatherThinking": 0.6, "fatherJudging": 0.7,
            "motherExtraversion": 0.8, "motherIntuition": 0.5,
            "motherThinking": 0.3, "motherJudging": 0.6
        },
        "environment": {
            "birthOrder": 1, "schoolType": "ACTIVE", "friendsInfluence": 0.8,
            "hasSiblings": true, "familyEnvironment": "SUPPORTIVE"
        }
    }"#;

    #[test]
    fn test_parse_request() {
        let request = parse_request(REQUEST).unwrap();
        assert_eq!(request.genetic.father_extraversion, Some(0.9));
        assert_eq!(request.genetic.mother_judging, Some(0.6));
        assert_eq!(request.environment.birth_order, Some(1));
        assert!(request.strategy.is_none());
    }

    #[test]
    fn test_missing_profile_rejected() {
        assert!(parse_request(r#"{"genetic": {}}"#).is_err());
    }

    #[test]
    fn test_strategy_precedence() {
        let mut request = parse_request(REQUEST).unwrap();
        let env = || Some("FROM_ENV".to_string());

        assert_eq!(resolve_strategy(Some("FLAG"), &request, env(), "DEFAULT"), "FLAG");
        assert_eq!(resolve_strategy(None, &request, env(), "DEFAULT"), "FROM_ENV");
        assert_eq!(resolve_strategy(None, &request, None, "DEFAULT"), "DEFAULT");

        request.strategy = Some("BODY".into());
        assert_eq!(resolve_strategy(None, &request, env(), "DEFAULT"), "BODY");
    }
}
