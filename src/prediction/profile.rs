use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::error::ValidationError;
use super::traits::Dichotomy;

pub const BIRTH_ORDER_FIRSTBORN: i32 = 1;

const IMPACT_FIRSTBORN: f64 = 0.1;
const IMPACT_SECOND_BORN: f64 = -0.1;
const IMPACT_ACTIVE_SCHOOL: f64 = 0.2;
const IMPACT_STRICT_SCHOOL: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Father,
    Mother,
}

/// Parent trait values, one per parent per dichotomy anchor (E, N, T, J).
///
/// Values are optional at the boundary so that a missing field can be reported
/// as a validation error instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticProfile {
    pub father_extraversion: Option<f64>,
    pub father_intuition: Option<f64>,
    pub father_thinking: Option<f64>,
    pub father_judging: Option<f64>,

    pub mother_extraversion: Option<f64>,
    pub mother_intuition: Option<f64>,
    pub mother_thinking: Option<f64>,
    pub mother_judging: Option<f64>,
}

/// Averages of both parents, one per dichotomy anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticTerms {
    pub extraversion: f64,
    pub intuition: f64,
    pub thinking: f64,
    pub judging: f64,
}

impl GeneticProfile {
    /// Profile where both parents carry `[extraversion, intuition, thinking, judging]`.
    pub fn from_parents(father: [f64; 4], mother: [f64; 4]) -> Self {
        Self {
            father_extraversion: Some(father[0]),
            father_intuition: Some(father[1]),
            father_thinking: Some(father[2]),
            father_judging: Some(father[3]),
            mother_extraversion: Some(mother[0]),
            mother_intuition: Some(mother[1]),
            mother_thinking: Some(mother[2]),
            mother_judging: Some(mother[3]),
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::from_parents([value; 4], [value; 4])
    }

    pub fn value(&self, parent: Parent, anchor: Dichotomy) -> (&'static str, Option<f64>) {
        match (parent, anchor) {
            (Parent::Father, Dichotomy::Energy) => ("fatherExtraversion", self.father_extraversion),
            (Parent::Father, Dichotomy::Information) => ("fatherIntuition", self.father_intuition),
            (Parent::Father, Dichotomy::Decisions) => ("fatherThinking", self.father_thinking),
            (Parent::Father, Dichotomy::Structure) => ("fatherJudging", self.father_judging),
            (Parent::Mother, Dichotomy::Energy) => ("motherExtraversion", self.mother_extraversion),
            (Parent::Mother, Dichotomy::Information) => ("motherIntuition", self.mother_intuition),
            (Parent::Mother, Dichotomy::Decisions) => ("motherThinking", self.mother_thinking),
            (Parent::Mother, Dichotomy::Structure) => ("motherJudging", self.mother_judging),
        }
    }

    /// Every value that is present must lie in [0, 1].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for anchor in Dichotomy::ALL {
            for parent in [Parent::Father, Parent::Mother] {
                if let (field, Some(value)) = self.value(parent, anchor) {
                    check_unit_interval(field, value)?;
                }
            }
        }
        Ok(())
    }

    fn require(&self, parent: Parent, anchor: Dichotomy) -> Result<f64, ValidationError> {
        let (field, value) = self.value(parent, anchor);
        let value = value.ok_or(ValidationError::MissingField { field })?;
        check_unit_interval(field, value)
    }

    /// Average of father and mother for one anchor. Both values are required.
    pub fn genetic_term(&self, anchor: Dichotomy) -> Result<f64, ValidationError> {
        let father = self.require(Parent::Father, anchor)?;
        let mother = self.require(Parent::Mother, anchor)?;
        Ok((father + mother) / 2.0)
    }

    pub fn genetic_terms(&self) -> Result<GeneticTerms, ValidationError> {
        Ok(GeneticTerms {
            extraversion: self.genetic_term(Dichotomy::Energy)?,
            intuition: self.genetic_term(Dichotomy::Information)?,
            thinking: self.genetic_term(Dichotomy::Decisions)?,
            judging: self.genetic_term(Dichotomy::Structure)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SchoolType {
    Active,
    Strict,
    Creative,
    Neutral,
}

impl SchoolType {
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or(Self::Neutral)
    }

    /// Like [`SchoolType::from_tag`], but also accepts the Russian school tags.
    /// Only the extraversion blend reads these aliases.
    pub fn from_extraversion_tag(tag: Option<&str>) -> Self {
        match Self::from_tag(tag) {
            Self::Neutral => match tag.map(str::to_uppercase).as_deref() {
                Some(SCHOOL_ACTIVE_ALIAS) => Self::Active,
                Some(SCHOOL_STRICT_ALIAS) => Self::Strict,
                Some(SCHOOL_CREATIVE_ALIAS) => Self::Creative,
                _ => Self::Neutral,
            },
            school => school,
        }
    }
}

const SCHOOL_ACTIVE_ALIAS: &str = "АКТИВНАЯ";
const SCHOOL_STRICT_ALIAS: &str = "СТРОГАЯ";
const SCHOOL_CREATIVE_ALIAS: &str = "ТВОРЧЕСКАЯ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyEnvironment {
    Supportive,
    Strict,
    Neutral,
}

impl FamilyEnvironment {
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or(Self::Neutral)
    }
}

/// Upbringing conditions. Categorical tags are kept as raw strings; unrecognized
/// tags behave as neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalProfile {
    pub birth_order: Option<i32>,
    pub school_type: Option<String>,
    pub friends_influence: Option<f64>,
    pub has_siblings: Option<bool>,
    pub family_environment: Option<String>,
}

impl EnvironmentalProfile {
    pub fn school(&self) -> SchoolType {
        SchoolType::from_tag(self.school_type.as_deref())
    }

    pub fn extraversion_school(&self) -> SchoolType {
        SchoolType::from_extraversion_tag(self.school_type.as_deref())
    }

    pub fn family(&self) -> FamilyEnvironment {
        FamilyEnvironment::from_tag(self.family_environment.as_deref())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(order) = self.birth_order {
            if order <= 0 {
                return Err(ValidationError::InvalidBirthOrder(order));
            }
        }
        if let Some(influence) = self.friends_influence {
            check_unit_interval("friendsInfluence", influence)?;
        }
        Ok(())
    }

    /// Overall environmental pressure from birth order and school type, clamped to [0, 1].
    /// Informational only; no trait blend reads it.
    pub fn overall_impact(&self) -> f64 {
        let birth = match self.birth_order {
            Some(BIRTH_ORDER_FIRSTBORN) => IMPACT_FIRSTBORN,
            Some(2) => IMPACT_SECOND_BORN,
            _ => 0.0,
        };
        let school = match self.school() {
            SchoolType::Active => IMPACT_ACTIVE_SCHOOL,
            SchoolType::Strict => IMPACT_STRICT_SCHOOL,
            SchoolType::Creative | SchoolType::Neutral => 0.0,
        };
        (0.5 + birth + school).clamp(0.0, 1.0)
    }
}

fn check_unit_interval(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genetic_term_average() {
        let profile = GeneticProfile::from_parents([0.8, 0.2, 0.6, 0.4], [0.4, 0.6, 0.2, 0.0]);
        let terms = profile.genetic_terms().unwrap();
        assert!((terms.extraversion - 0.6).abs() < 1e-9);
        assert!((terms.intuition - 0.4).abs() < 1e-9);
        assert!((terms.thinking - 0.4).abs() < 1e-9);
        assert!((terms.judging - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_missing_genetic_value() {
        let profile = GeneticProfile {
            mother_judging: None,
            ..GeneticProfile::uniform(0.5)
        };
        assert!(profile.validate().is_ok());
        assert_eq!(
            profile.genetic_terms(),
            Err(ValidationError::MissingField {
                field: "motherJudging"
            })
        );
        assert!(profile.genetic_term(Dichotomy::Decisions).is_ok());
    }

    #[test]
    fn test_out_of_range_genetic_value() {
        let profile = GeneticProfile {
            father_intuition: Some(1.2),
            ..GeneticProfile::uniform(0.5)
        };
        assert!(matches!(
            profile.validate(),
            Err(ValidationError::OutOfRange {
                field: "fatherIntuition",
                ..
            })
        ));

        let nan = GeneticProfile {
            mother_thinking: Some(f64::NAN),
            ..GeneticProfile::uniform(0.5)
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_tags_case_insensitive() {
        assert_eq!(SchoolType::from_tag(Some("active")), SchoolType::Active);
        assert_eq!(SchoolType::from_tag(Some("Creative")), SchoolType::Creative);
        assert_eq!(SchoolType::from_tag(Some("CALM")), SchoolType::Neutral);
        assert_eq!(SchoolType::from_tag(None), SchoolType::Neutral);
        assert_eq!(
            FamilyEnvironment::from_tag(Some("strict")),
            FamilyEnvironment::Strict
        );
        assert_eq!(
            FamilyEnvironment::from_tag(Some("chaotic")),
            FamilyEnvironment::Neutral
        );
    }

    #[test]
    fn test_extraversion_tag_aliases() {
        assert_eq!(
            SchoolType::from_extraversion_tag(Some("АКТИВНАЯ")),
            SchoolType::Active
        );
        assert_eq!(
            SchoolType::from_extraversion_tag(Some("строгая")),
            SchoolType::Strict
        );
        assert_eq!(
            SchoolType::from_extraversion_tag(Some("Творческая")),
            SchoolType::Creative
        );
        assert_eq!(
            SchoolType::from_extraversion_tag(Some("active")),
            SchoolType::Active
        );
        assert_eq!(
            SchoolType::from_extraversion_tag(Some("CALM")),
            SchoolType::Neutral
        );
        assert_eq!(SchoolType::from_extraversion_tag(None), SchoolType::Neutral);

        // plain lookup stays English-only
        assert_eq!(SchoolType::from_tag(Some("ТВОРЧЕСКАЯ")), SchoolType::Neutral);
        let env = EnvironmentalProfile {
            school_type: Some("АКТИВНАЯ".into()),
            ..Default::default()
        };
        assert_eq!(env.school(), SchoolType::Neutral);
        assert_eq!(env.extraversion_school(), SchoolType::Active);
        assert!((env.overall_impact() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_environment_validation() {
        let ok = EnvironmentalProfile {
            birth_order: Some(3),
            friends_influence: Some(1.0),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let zero_order = EnvironmentalProfile {
            birth_order: Some(0),
            ..Default::default()
        };
        assert_eq!(
            zero_order.validate(),
            Err(ValidationError::InvalidBirthOrder(0))
        );

        let friends = EnvironmentalProfile {
            friends_influence: Some(-0.1),
            ..Default::default()
        };
        assert!(matches!(
            friends.validate(),
            Err(ValidationError::OutOfRange {
                field: "friendsInfluence",
                ..
            })
        ));
    }

    #[test]
    fn test_overall_impact() {
        let neutral = EnvironmentalProfile::default();
        assert!((neutral.overall_impact() - 0.5).abs() < 1e-9);

        let firstborn_active = EnvironmentalProfile {
            birth_order: Some(1),
            school_type: Some("ACTIVE".into()),
            ..Default::default()
        };
        assert!((firstborn_active.overall_impact() - 0.8).abs() < 1e-9);

        let second_strict = EnvironmentalProfile {
            birth_order: Some(2),
            school_type: Some("strict".into()),
            ..Default::default()
        };
        assert!((second_strict.overall_impact() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"birthOrder": 2, "schoolType": "CREATIVE", "hasSiblings": false}"#;
        let env: EnvironmentalProfile = serde_json::from_str(json).unwrap();
        assert_eq!(env.birth_order, Some(2));
        assert_eq!(env.school(), SchoolType::Creative);
        assert_eq!(env.has_siblings, Some(false));
        assert_eq!(env.friends_influence, None);
        assert_eq!(env.family(), FamilyEnvironment::Neutral);
    }
}
