//! Aggregated settings page
//!
//! Collects the configuration forms of all configurable modules into one
//! composite form and persists submissions through the configuration
//! store.

mod handler;
mod page;

pub use handler::{settings_router, SettingsState};
pub use page::SettingsPage;
