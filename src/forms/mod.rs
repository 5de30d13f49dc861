//! Form field descriptors, submission parsing, and rendering
//!
//! Modules describe their configuration as a flat list of
//! [`FieldDescriptor`]s; the settings page concatenates those lists into a
//! single [`SettingsForm`] and renders it as one HTML form.

mod render;
mod types;

pub use render::render_form;
pub use types::{FieldDescriptor, FieldKind, FormData, ParseError, SelectOption, SettingsForm};
