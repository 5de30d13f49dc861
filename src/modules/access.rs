//! Access control module
//!
//! Governs who may enter a course unit: anonymous participation and an
//! optional access code.

use super::{from_config_value, to_config_value, ConfigFactory, Module};
use crate::forms::{FieldDescriptor, FieldKind, FormData, ParseError};
use crate::storage::ConfigValue;
use serde::{Deserialize, Serialize};

const FIELD_ALLOW_ANONYMOUS: &str = "access.allow_anonymous";
const FIELD_ACCESS_CODE: &str = "access.access_code";

/// Access control configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    /// Allow participation without an account
    #[serde(default)]
    pub allow_anonymous: bool,

    /// Access code required to enter; empty means no code
    #[serde(default)]
    pub access_code: String,
}

/// Access control module
pub struct AccessModule {
    factory: AccessConfigFactory,
}

impl AccessModule {
    pub fn new() -> Self {
        Self {
            factory: AccessConfigFactory,
        }
    }
}

impl Default for AccessModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for AccessModule {
    fn id(&self) -> &'static str {
        "access"
    }

    fn label(&self) -> &str {
        "Access"
    }

    fn config_factory(&self) -> Option<&dyn ConfigFactory> {
        Some(&self.factory)
    }
}

struct AccessConfigFactory;

impl ConfigFactory for AccessConfigFactory {
    fn form_fields(&self, current: Option<&ConfigValue>) -> Vec<FieldDescriptor> {
        let config: AccessConfig = from_config_value(current);

        vec![
            FieldDescriptor::new(
                FIELD_ALLOW_ANONYMOUS,
                "Allow anonymous participation",
                FieldKind::Checkbox,
            )
            .with_value(config.allow_anonymous.to_string()),
            FieldDescriptor::new(FIELD_ACCESS_CODE, "Access code", FieldKind::Text)
                .with_value(config.access_code)
                .with_help("Leave empty to allow entry without a code"),
        ]
    }

    fn read_config(&self, data: &FormData) -> Result<ConfigValue, ParseError> {
        let config = AccessConfig {
            allow_anonymous: data.checkbox(FIELD_ALLOW_ANONYMOUS),
            access_code: data
                .text(FIELD_ACCESS_CODE)
                .unwrap_or("")
                .trim()
                .to_string(),
        };

        Ok(to_config_value(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Command;
    use crate::forms::SettingsForm;
    use std::collections::HashMap;

    fn bind(fields: Vec<FieldDescriptor>, pairs: &[(&str, &str)]) -> FormData {
        let form = SettingsForm::new(Command::StoreSettings, fields);
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        form.bind(raw)
    }

    #[test]
    fn test_fields_from_defaults() {
        let module = AccessModule::new();
        let factory = module.config_factory().unwrap();
        let fields = factory.form_fields(None);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, FIELD_ALLOW_ANONYMOUS);
        assert_eq!(fields[0].value.as_deref(), Some("false"));
        assert_eq!(fields[1].value.as_deref(), Some(""));
    }

    #[test]
    fn test_fields_seeded_from_stored_config() {
        let stored = serde_json::json!({
            "allowAnonymous": true,
            "accessCode": "open-sesame"
        });
        let module = AccessModule::new();
        let fields = module.config_factory().unwrap().form_fields(Some(&stored));

        assert_eq!(fields[0].value.as_deref(), Some("true"));
        assert_eq!(fields[1].value.as_deref(), Some("open-sesame"));
    }

    #[test]
    fn test_read_config_round_trip() {
        let module = AccessModule::new();
        let factory = module.config_factory().unwrap();
        let data = bind(
            factory.form_fields(None),
            &[
                (FIELD_ALLOW_ANONYMOUS, "on"),
                (FIELD_ACCESS_CODE, "  winter24  "),
            ],
        );

        let value = factory.read_config(&data).unwrap();
        let config: AccessConfig = serde_json::from_value(value).unwrap();
        assert!(config.allow_anonymous);
        assert_eq!(config.access_code, "winter24");
    }

    #[test]
    fn test_read_config_unchecked_box() {
        let module = AccessModule::new();
        let factory = module.config_factory().unwrap();
        let data = bind(factory.form_fields(None), &[(FIELD_ACCESS_CODE, "")]);

        let value = factory.read_config(&data).unwrap();
        let config: AccessConfig = serde_json::from_value(value).unwrap();
        assert!(!config.allow_anonymous);
        assert_eq!(config.access_code, "");
    }
}
