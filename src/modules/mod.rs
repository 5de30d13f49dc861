//! Pluggable course-tooling modules
//!
//! A [`Module`] is a unit of functionality that may contribute a
//! configuration form through an optional [`ConfigFactory`]. Modules
//! without a factory have no settings and never appear on the settings
//! page.

mod access;
mod feedback;
mod scoring;

pub use access::{AccessConfig, AccessModule};
pub use feedback::{FeedbackConfig, FeedbackModule};
pub use scoring::{ScoringConfig, ScoringMode, ScoringModule};

use crate::forms::{FieldDescriptor, FormData, ParseError};
use crate::storage::ConfigValue;
use std::sync::Arc;

/// Capability for producing and consuming a module's configuration form
pub trait ConfigFactory: Send + Sync {
    /// Form fields seeded with the current configuration; `None` means the
    /// module has never been configured and defaults apply
    fn form_fields(&self, current: Option<&ConfigValue>) -> Vec<FieldDescriptor>;

    /// Parse a configuration object back out of a bound submission
    fn read_config(&self, data: &FormData) -> Result<ConfigValue, ParseError>;
}

/// A pluggable unit of functionality
pub trait Module: Send + Sync {
    /// Stable identifier, used as the configuration store key
    fn id(&self) -> &'static str;

    /// Display label
    fn label(&self) -> &str;

    /// Configuration capability, if the module has settings
    fn config_factory(&self) -> Option<&dyn ConfigFactory>;
}

/// The modules shipped with coursekit, in page order
pub fn builtin_modules() -> Vec<Arc<dyn Module>> {
    vec![
        Arc::new(AccessModule::new()),
        Arc::new(ScoringModule::new()),
        Arc::new(FeedbackModule::new()),
    ]
}

/// Serialize a typed module configuration into a store value
pub(crate) fn to_config_value<T: serde::Serialize>(config: &T) -> ConfigValue {
    serde_json::to_value(config).unwrap_or_else(|err| {
        tracing::error!("Failed to serialize module configuration: {}", err);
        ConfigValue::Null
    })
}

/// Deserialize a stored value into a typed configuration, falling back to
/// defaults when the value is absent or has an unexpected shape
pub(crate) fn from_config_value<T>(current: Option<&ConfigValue>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match current {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            tracing::warn!("Stored module configuration has unexpected shape: {}", err);
            T::default()
        }),
        None => T::default(),
    }
}
