use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::mbti_type::MbtiType;

/// Midpoint of every trait scale. The primary letter wins at or above it.
pub const NEUTRAL_SCORE: f64 = 0.5;

pub fn normalize(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum TraitCode {
    E,
    I,
    N,
    S,
    T,
    F,
    J,
    P,
}

impl TraitCode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::E => "Extraversion",
            Self::I => "Introversion",
            Self::N => "Intuition",
            Self::S => "Sensing",
            Self::T => "Thinking",
            Self::F => "Feeling",
            Self::J => "Judging",
            Self::P => "Perceiving",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::E => "oriented toward the outer world, sociable",
            Self::I => "oriented toward the inner world, reflective",
            Self::N => "focused on ideas and possibilities",
            Self::S => "focused on facts and concrete reality",
            Self::T => "decides on the basis of logic",
            Self::F => "decides on the basis of values",
            Self::J => "prefers structure and planning",
            Self::P => "prefers flexibility and spontaneity",
        }
    }
}

/// One of the four letter pairs, in type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dichotomy {
    Energy,
    Information,
    Decisions,
    Structure,
}

impl Dichotomy {
    pub const ALL: [Dichotomy; 4] = [
        Dichotomy::Energy,
        Dichotomy::Information,
        Dichotomy::Decisions,
        Dichotomy::Structure,
    ];

    pub fn primary(&self) -> TraitCode {
        match self {
            Self::Energy => TraitCode::E,
            Self::Information => TraitCode::N,
            Self::Decisions => TraitCode::T,
            Self::Structure => TraitCode::J,
        }
    }

    pub fn complement(&self) -> TraitCode {
        match self {
            Self::Energy => TraitCode::I,
            Self::Information => TraitCode::S,
            Self::Decisions => TraitCode::F,
            Self::Structure => TraitCode::P,
        }
    }
}

/// Scores for all eight trait letters. Only the primaries are stored
/// independently; each complement is `1 - primary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraitScores {
    #[serde(rename = "E")]
    extraversion: f64,
    #[serde(rename = "I")]
    introversion: f64,
    #[serde(rename = "N")]
    intuition: f64,
    #[serde(rename = "S")]
    sensing: f64,
    #[serde(rename = "T")]
    thinking: f64,
    #[serde(rename = "F")]
    feeling: f64,
    #[serde(rename = "J")]
    judging: f64,
    #[serde(rename = "P")]
    perceiving: f64,
}

impl TraitScores {
    /// Builds the full set from the four primaries, clamping each to [0, 1].
    pub fn from_primaries(extraversion: f64, intuition: f64, thinking: f64, judging: f64) -> Self {
        let (e, n, t, j) = (
            normalize(extraversion),
            normalize(intuition),
            normalize(thinking),
            normalize(judging),
        );
        Self {
            extraversion: e,
            introversion: 1.0 - e,
            intuition: n,
            sensing: 1.0 - n,
            thinking: t,
            feeling: 1.0 - t,
            judging: j,
            perceiving: 1.0 - j,
        }
    }

    pub fn score(&self, code: TraitCode) -> f64 {
        match code {
            TraitCode::E => self.extraversion,
            TraitCode::I => self.introversion,
            TraitCode::N => self.intuition,
            TraitCode::S => self.sensing,
            TraitCode::T => self.thinking,
            TraitCode::F => self.feeling,
            TraitCode::J => self.judging,
            TraitCode::P => self.perceiving,
        }
    }

    pub fn primary(&self, dichotomy: Dichotomy) -> f64 {
        self.score(dichotomy.primary())
    }

    pub fn values(&self) -> [f64; 8] {
        [
            self.extraversion,
            self.introversion,
            self.intuition,
            self.sensing,
            self.thinking,
            self.feeling,
            self.judging,
            self.perceiving,
        ]
    }

    /// Four-letter type; each primary letter wins at `>= 0.5`.
    pub fn mbti_type(&self) -> MbtiType {
        let [e, n, t, j] = Dichotomy::ALL.map(|d| self.primary(d) >= NEUTRAL_SCORE);
        MbtiType::from_poles(e, n, t, j)
    }
}

/// How decisive a score set is, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfidenceRule {
    #[strum(serialize = "average-deviation")]
    AverageDeviation,
    #[strum(serialize = "max-deviation")]
    MaxDeviation,
}

impl ConfidenceRule {
    pub fn apply(&self, scores: &TraitScores) -> f64 {
        let deviations = scores.values().map(|s| (s - NEUTRAL_SCORE).abs());
        let deviation = match self {
            Self::AverageDeviation => deviations.iter().sum::<f64>() / deviations.len() as f64,
            Self::MaxDeviation => deviations.iter().copied().fold(0.0, f64::max),
        };
        normalize(deviation * 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum ConfidenceTier {
    #[strum(serialize = "STRONG")]
    Strong,
    #[strum(serialize = "HIGH")]
    High,
    #[strum(serialize = "MODERATE")]
    Moderate,
    #[strum(serialize = "LOW")]
    Low,
}

impl ConfidenceTier {
    pub const STRONG_THRESHOLD: f64 = 0.85;
    pub const HIGH_THRESHOLD: f64 = 0.70;
    pub const MODERATE_THRESHOLD: f64 = 0.50;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::STRONG_THRESHOLD {
            ConfidenceTier::Strong
        } else if score >= Self::HIGH_THRESHOLD {
            ConfidenceTier::High
        } else if score >= Self::MODERATE_THRESHOLD {
            ConfidenceTier::Moderate
        } else {
            ConfidenceTier::Low
        }
    }
}
