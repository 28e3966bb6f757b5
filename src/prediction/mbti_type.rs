use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::risk::RiskTier;

const GENERIC_DESCRIPTION: &str = "• A unique combination of personality traits";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl MbtiType {
    /// Type from the winning pole of each dichotomy, `true` meaning E, N, T, J.
    pub fn from_poles(extravert: bool, intuitive: bool, thinking: bool, judging: bool) -> Self {
        match (extravert, intuitive, thinking, judging) {
            (false, false, true, true) => Self::Istj,
            (false, false, false, true) => Self::Isfj,
            (false, true, false, true) => Self::Infj,
            (false, true, true, true) => Self::Intj,
            (false, false, true, false) => Self::Istp,
            (false, false, false, false) => Self::Isfp,
            (false, true, false, false) => Self::Infp,
            (false, true, true, false) => Self::Intp,
            (true, false, true, false) => Self::Estp,
            (true, false, false, false) => Self::Esfp,
            (true, true, false, false) => Self::Enfp,
            (true, true, true, false) => Self::Entp,
            (true, false, true, true) => Self::Estj,
            (true, false, false, true) => Self::Esfj,
            (true, true, false, true) => Self::Enfj,
            (true, true, true, true) => Self::Entj,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Istj => "Inspector",
            Self::Isfj => "Protector",
            Self::Infj => "Counselor",
            Self::Intj => "Strategist",
            Self::Istp => "Craftsman",
            Self::Isfp => "Composer",
            Self::Infp => "Healer",
            Self::Intp => "Architect",
            Self::Estp => "Dynamo",
            Self::Esfp => "Performer",
            Self::Enfp => "Champion",
            Self::Entp => "Visionary",
            Self::Estj => "Supervisor",
            Self::Esfj => "Provider",
            Self::Enfj => "Teacher",
            Self::Entj => "Commander",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Istj => "responsible, organized, practical",
            Self::Isfj => "devoted, warm, responsible",
            Self::Infj => "insightful, inspiring, persistent",
            Self::Intj => "innovative, independent, decisive",
            Self::Istp => "spontaneous, logical, efficient",
            Self::Isfp => "friendly, sensitive, modest",
            Self::Infp => "idealistic, empathetic, creative",
            Self::Intp => "logical, original, curious",
            Self::Estp => "energetic, practical, spontaneous",
            Self::Esfp => "outgoing, friendly, generous",
            Self::Enfp => "enthusiastic, creative, sociable",
            Self::Entp => "inventive, clever, direct",
            Self::Estj => "practical, responsible, organized",
            Self::Esfj => "caring, popular, harmonious",
            Self::Enfj => "charismatic, inspiring, tactful",
            Self::Entj => "decisive, commanding, strategic",
        }
    }

    /// Bullying-risk group attached to the type itself, independent of any score.
    pub fn risk_group(&self) -> RiskTier {
        match self {
            Self::Entj | Self::Estj | Self::Estp => RiskTier::High,
            Self::Entp | Self::Intj => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }

    /// Closing section of the analysis. Types without an entry share a generic line.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Entj => "• Born leader and strategist\n• Decisive, enjoys challenges\n• Can be overly critical",
            Self::Enfj => "• Inspirer, charismatic\n• Sensitive to the emotions of others\n• Tries to please everyone",
            Self::Intj => "• Strategist, independent thinker\n• Goal-driven perfectionist\n• Can seem detached",
            Self::Entp => "• Innovator, loves debate\n• Quick thinker, enterprising\n• Can be contrarian",
            Self::Estj => "• Organizer, practical\n• Responsible, traditional\n• Can be rigid",
            Self::Esfj => "• Caring, popular\n• Responsible, harmonious\n• Sensitive to criticism",
            Self::Istj => "• Responsible, realistic\n• Hard-working, traditional\n• May resist change",
            Self::Isfj => "• Protector, devoted\n• Warm, practical\n• Avoids conflict",
            _ => GENERIC_DESCRIPTION,
        }
    }
}
