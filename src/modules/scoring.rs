//! Scoring module
//!
//! Pass threshold, attempt limits, and how repeated attempts are combined
//! into a final score.

use super::{from_config_value, to_config_value, ConfigFactory, Module};
use crate::forms::{FieldDescriptor, FieldKind, FormData, ParseError, SelectOption};
use crate::storage::ConfigValue;
use serde::{Deserialize, Serialize};

const FIELD_PASS_THRESHOLD: &str = "scoring.pass_threshold";
const FIELD_MAX_ATTEMPTS: &str = "scoring.max_attempts";
const FIELD_MODE: &str = "scoring.mode";

/// How repeated attempts are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Best,
    Latest,
    Average,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Latest => "latest",
            Self::Average => "average",
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Self::Best),
            "latest" => Ok(Self::Latest),
            "average" => Ok(Self::Average),
            other => Err(format!("unknown scoring mode: {}", other)),
        }
    }
}

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Minimum percentage to pass (0-100)
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: i64,

    /// Maximum attempts per participant; 0 means unlimited
    #[serde(default)]
    pub max_attempts: i64,

    #[serde(default = "default_mode")]
    pub mode: ScoringMode,
}

fn default_pass_threshold() -> i64 {
    60
}

fn default_mode() -> ScoringMode {
    ScoringMode::Best
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            max_attempts: 0,
            mode: default_mode(),
        }
    }
}

/// Scoring module
pub struct ScoringModule {
    factory: ScoringConfigFactory,
}

impl ScoringModule {
    pub fn new() -> Self {
        Self {
            factory: ScoringConfigFactory,
        }
    }
}

impl Default for ScoringModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ScoringModule {
    fn id(&self) -> &'static str {
        "scoring"
    }

    fn label(&self) -> &str {
        "Scoring"
    }

    fn config_factory(&self) -> Option<&dyn ConfigFactory> {
        Some(&self.factory)
    }
}

struct ScoringConfigFactory;

impl ConfigFactory for ScoringConfigFactory {
    fn form_fields(&self, current: Option<&ConfigValue>) -> Vec<FieldDescriptor> {
        let config: ScoringConfig = from_config_value(current);

        vec![
            FieldDescriptor::new(FIELD_PASS_THRESHOLD, "Pass threshold (%)", FieldKind::Integer)
                .with_value(config.pass_threshold.to_string())
                .required(),
            FieldDescriptor::new(FIELD_MAX_ATTEMPTS, "Maximum attempts", FieldKind::Integer)
                .with_value(config.max_attempts.to_string())
                .required()
                .with_help("0 allows unlimited attempts"),
            FieldDescriptor::new(
                FIELD_MODE,
                "Scoring mode",
                FieldKind::Select {
                    options: vec![
                        SelectOption::new("best", "Best attempt"),
                        SelectOption::new("latest", "Latest attempt"),
                        SelectOption::new("average", "Average of attempts"),
                    ],
                },
            )
            .with_value(config.mode.to_string())
            .required(),
        ]
    }

    fn read_config(&self, data: &FormData) -> Result<ConfigValue, ParseError> {
        let pass_threshold = data.integer_in_range(FIELD_PASS_THRESHOLD, 0, 100)?;
        let max_attempts = data.integer_in_range(FIELD_MAX_ATTEMPTS, 0, 100)?;
        let mode = data
            .require_text(FIELD_MODE)?
            .parse::<ScoringMode>()
            .map_err(|_| ParseError::InvalidOption {
                field: FIELD_MODE.to_string(),
                value: data.text(FIELD_MODE).unwrap_or("").to_string(),
            })?;

        Ok(to_config_value(&ScoringConfig {
            pass_threshold,
            max_attempts,
            mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Command;
    use crate::forms::SettingsForm;
    use std::collections::HashMap;

    fn submit(pairs: &[(&str, &str)]) -> Result<ConfigValue, ParseError> {
        let module = ScoringModule::new();
        let factory = module.config_factory().unwrap();
        let form = SettingsForm::new(Command::StoreSettings, factory.form_fields(None));
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        factory.read_config(&form.bind(raw))
    }

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.pass_threshold, 60);
        assert_eq!(config.max_attempts, 0);
        assert_eq!(config.mode, ScoringMode::Best);
    }

    #[test]
    fn test_fields_carry_current_values() {
        let stored = serde_json::json!({
            "passThreshold": 80,
            "maxAttempts": 3,
            "mode": "average"
        });
        let module = ScoringModule::new();
        let fields = module.config_factory().unwrap().form_fields(Some(&stored));

        assert_eq!(fields[0].value.as_deref(), Some("80"));
        assert_eq!(fields[1].value.as_deref(), Some("3"));
        assert_eq!(fields[2].value.as_deref(), Some("average"));
    }

    #[test]
    fn test_read_config_valid() {
        let value = submit(&[
            (FIELD_PASS_THRESHOLD, "75"),
            (FIELD_MAX_ATTEMPTS, "2"),
            (FIELD_MODE, "latest"),
        ])
        .unwrap();

        let config: ScoringConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.pass_threshold, 75);
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.mode, ScoringMode::Latest);
    }

    #[test]
    fn test_read_config_threshold_out_of_range() {
        let err = submit(&[
            (FIELD_PASS_THRESHOLD, "130"),
            (FIELD_MAX_ATTEMPTS, "2"),
            (FIELD_MODE, "best"),
        ])
        .unwrap_err();

        assert!(matches!(err, ParseError::OutOfRange { value: 130, .. }));
    }

    #[test]
    fn test_read_config_unknown_mode() {
        let err = submit(&[
            (FIELD_PASS_THRESHOLD, "60"),
            (FIELD_MAX_ATTEMPTS, "0"),
            (FIELD_MODE, "median"),
        ])
        .unwrap_err();

        assert!(matches!(err, ParseError::InvalidOption { .. }));
    }

    #[test]
    fn test_read_config_missing_threshold() {
        let err = submit(&[(FIELD_MAX_ATTEMPTS, "0"), (FIELD_MODE, "best")]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField(FIELD_PASS_THRESHOLD.to_string())
        );
    }

    #[test]
    fn test_scoring_mode_round_trip() {
        for mode in [ScoringMode::Best, ScoringMode::Latest, ScoringMode::Average] {
            assert_eq!(mode.as_str().parse::<ScoringMode>().unwrap(), mode);
        }
    }
}
