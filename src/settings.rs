use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::prediction::GENETIC_STRATEGY;

static SETTINGS: OnceLock<Loaded> = OnceLock::new();

struct Loaded {
    settings: Settings,
    problems: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub prediction: Prediction,
    pub report: Report,
    pub logging: Logging,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub default_strategy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub show_profile: bool,
    pub show_analysis: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub directive: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prediction: Prediction {
                default_strategy: GENETIC_STRATEGY.to_string(),
            },
            report: Report {
                show_profile: true,
                show_analysis: true,
                json: false,
            },
            logging: Logging {
                directive: "mbti_predict=info".to_string(),
            },
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        &loaded().settings
    }

    /// Reads the default file, then lets the override file replace it. Files that
    /// exist but cannot be read or parsed are skipped and reported as problems.
    fn load_from_paths(default_path: &Path, override_path: &Path) -> (Settings, Vec<String>) {
        let mut problems = Vec::new();
        let mut settings = Settings::default();

        for path in [default_path, override_path] {
            if !path.exists() {
                continue;
            }
            match fs::read_to_string(path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(parsed) => settings = parsed,
                    Err(e) => problems.push(format!(
                        "ignoring unparsable settings in {}: {e}",
                        path.display()
                    )),
                },
                Err(e) => problems.push(format!("cannot read {}: {e}", path.display())),
            }
        }

        (settings, problems)
    }

    pub fn parse(content: &str) -> Result<Settings, ron::error::SpannedError> {
        ron::from_str::<Settings>(content)
    }
}

fn loaded() -> &'static Loaded {
    SETTINGS.get_or_init(|| {
        let (settings, problems) = Settings::load_from_paths(
            Path::new("settings.default.ron"),
            Path::new("settings.ron"),
        );
        Loaded { settings, problems }
    })
}

pub fn settings() -> &'static Settings {
    Settings::load()
}

/// Problems found while loading settings. Settings load before logging is set up,
/// so callers report these once a subscriber is installed.
pub fn settings_problems() -> &'static [String] {
    &loaded().problems
}
