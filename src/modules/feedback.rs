//! Feedback module
//!
//! Controls what participants see after finishing: solutions and a
//! closing summary text.

use super::{from_config_value, to_config_value, ConfigFactory, Module};
use crate::forms::{FieldDescriptor, FieldKind, FormData, ParseError};
use crate::storage::ConfigValue;
use serde::{Deserialize, Serialize};

const FIELD_SHOW_SOLUTIONS: &str = "feedback.show_solutions";
const FIELD_SUMMARY: &str = "feedback.summary";

/// Feedback configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackConfig {
    /// Reveal correct solutions after completion
    #[serde(default)]
    pub show_solutions: bool,

    /// Closing text shown on the results page
    #[serde(default)]
    pub summary: String,
}

/// Feedback module
pub struct FeedbackModule {
    factory: FeedbackConfigFactory,
}

impl FeedbackModule {
    pub fn new() -> Self {
        Self {
            factory: FeedbackConfigFactory,
        }
    }
}

impl Default for FeedbackModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for FeedbackModule {
    fn id(&self) -> &'static str {
        "feedback"
    }

    fn label(&self) -> &str {
        "Feedback"
    }

    fn config_factory(&self) -> Option<&dyn ConfigFactory> {
        Some(&self.factory)
    }
}

struct FeedbackConfigFactory;

impl ConfigFactory for FeedbackConfigFactory {
    fn form_fields(&self, current: Option<&ConfigValue>) -> Vec<FieldDescriptor> {
        let config: FeedbackConfig = from_config_value(current);

        vec![
            FieldDescriptor::new(
                FIELD_SHOW_SOLUTIONS,
                "Show solutions after completion",
                FieldKind::Checkbox,
            )
            .with_value(config.show_solutions.to_string()),
            FieldDescriptor::new(FIELD_SUMMARY, "Closing summary", FieldKind::TextArea)
                .with_value(config.summary)
                .with_help("Shown on the results page; may be empty"),
        ]
    }

    fn read_config(&self, data: &FormData) -> Result<ConfigValue, ParseError> {
        let config = FeedbackConfig {
            show_solutions: data.checkbox(FIELD_SHOW_SOLUTIONS),
            summary: data.text(FIELD_SUMMARY).unwrap_or("").to_string(),
        };

        Ok(to_config_value(&config))
    }
}
