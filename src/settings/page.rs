//! The settings aggregator
//!
//! `SettingsPage` owns no durable state: it holds the fixed list of
//! participating modules and a handle to the configuration store, and
//! answers the show/store commands with host events.

use crate::error::{Error, Result};
use crate::events::{Command, HostEvent, TabDefinition, UiData};
use crate::forms::{render_form, SettingsForm};
use crate::modules::Module;
use crate::storage::ConfigStore;
use std::collections::HashMap;
use std::sync::Arc;

const PAGE_TITLE: &str = "Settings";

/// Aggregates module configuration forms into one settings page
pub struct SettingsPage {
    /// Participating modules: fixed at initialization, original order
    modules: Vec<Arc<dyn Module>>,
    store: Arc<dyn ConfigStore>,
}

impl SettingsPage {
    /// Build the page from the host's module list, keeping only modules
    /// that expose a config factory, and hand back the tab registration
    /// event for the host dispatcher
    pub fn initialize(
        modules: Vec<Arc<dyn Module>>,
        store: Arc<dyn ConfigStore>,
    ) -> (Self, HostEvent) {
        let modules: Vec<Arc<dyn Module>> = modules
            .into_iter()
            .filter(|module| module.config_factory().is_some())
            .collect();

        tracing::debug!(
            "Settings page initialized with {} configurable module(s)",
            modules.len()
        );

        let page = Self { modules, store };
        let event = HostEvent::AddTab {
            tab: TabDefinition {
                id: "settings".to_string(),
                label: PAGE_TITLE.to_string(),
                command: Command::ShowSettings,
            },
        };
        (page, event)
    }

    /// Identifiers of the participating modules, in page order
    pub fn module_ids(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.id()).collect()
    }

    /// Build the composite form: every participating module's fields,
    /// seeded from the store, concatenated in module order
    pub async fn build_form(&self) -> Result<SettingsForm> {
        let mut fields = Vec::new();

        for module in &self.modules {
            let Some(factory) = module.config_factory() else {
                continue;
            };

            let current = self
                .store
                .configuration(module.id())
                .await
                .map_err(|e| Error::ConfigRead {
                    module: module.id().to_string(),
                    reason: e.to_string(),
                })?;

            fields.extend(factory.form_fields(current.as_ref()));
        }

        Ok(SettingsForm::new(Command::StoreSettings, fields))
    }

    /// Answer the show command with rendered page content
    pub async fn show(&self) -> Result<HostEvent> {
        let form = self.build_form().await?;

        Ok(HostEvent::SetUi {
            ui: UiData {
                title: PAGE_TITLE.to_string(),
                markup: render_form(&form),
            },
        })
    }

    /// Answer the store command: bind the submission, write every
    /// module's parsed configuration, commit once, redirect to show
    pub async fn store(&self, submission: HashMap<String, String>) -> Result<HostEvent> {
        let form = self.build_form().await?;
        let data = form.bind(submission);

        for module in &self.modules {
            let Some(factory) = module.config_factory() else {
                continue;
            };

            let config = factory
                .read_config(&data)
                .map_err(|source| Error::FieldParse {
                    module: module.id().to_string(),
                    source,
                })?;

            self.store.set_configuration(module.id(), config).await?;
        }

        self.store.save().await?;
        tracing::info!("Stored settings for {} module(s)", self.modules.len());

        Ok(HostEvent::Redirect {
            command: Command::ShowSettings,
        })
    }
}
