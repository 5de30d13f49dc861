//! Per-module configuration persistence

mod store;

pub use store::{ConfigStore, FileConfigStore};

/// Configuration objects are opaque JSON values; only the owning module's
/// factory interprets them.
pub type ConfigValue = serde_json::Value;
