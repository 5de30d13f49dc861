//! Form wire types and submission parsing
//!
//! All wire types use camelCase JSON serialization so descriptors can be
//! served to API clients as-is.

use crate::events::Command;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Field-level parse failure reported by a module factory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("invalid integer value '{value}' for field '{field}'")]
    InvalidInteger { field: String, value: String },

    #[error("value {value} for field '{field}' is out of range ({min}..={max})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("value '{value}' is not an allowed option for field '{field}'")]
    InvalidOption { field: String, value: String },
}

/// One choice in a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Input widget kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    Text,
    TextArea,
    Integer,
    Checkbox,
    Select { options: Vec<SelectOption> },
}

/// A single form field contributed by a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Submission key, unique across the whole composite form
    pub name: String,
    /// Display label
    pub label: String,
    #[serde(flatten)]
    pub field: FieldKind,
    /// Current value, rendered into the form
    pub value: Option<String>,
    pub required: bool,
    pub help: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field,
            value: None,
            required: false,
            help: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Submitted form data bound to a form, with typed accessors
///
/// Checkboxes are absent from urlencoded submissions when unchecked, so
/// [`FormData::checkbox`] treats absence as `false`.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn require_text(&self, name: &str) -> Result<&str, ParseError> {
        self.text(name)
            .ok_or_else(|| ParseError::MissingField(name.to_string()))
    }

    pub fn integer(&self, name: &str) -> Result<i64, ParseError> {
        let raw = self.require_text(name)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger {
                field: name.to_string(),
                value: raw.to_string(),
            })
    }

    pub fn integer_in_range(&self, name: &str, min: i64, max: i64) -> Result<i64, ParseError> {
        let value = self.integer(name)?;
        if value < min || value > max {
            return Err(ParseError::OutOfRange {
                field: name.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    pub fn checkbox(&self, name: &str) -> bool {
        matches!(self.text(name), Some("on") | Some("true") | Some("1"))
    }

    /// Read a select field, validating against the allowed values
    pub fn option<'a>(&'a self, name: &str, allowed: &[&str]) -> Result<&'a str, ParseError> {
        let value = self.require_text(name)?;
        if !allowed.contains(&value) {
            return Err(ParseError::InvalidOption {
                field: name.to_string(),
                value: value.to_string(),
            });
        }
        Ok(value)
    }
}

/// The composite settings form: all module fields in module order, bound
/// to the command that stores the submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    pub action: Command,
    pub fields: Vec<FieldDescriptor>,
}

impl SettingsForm {
    pub fn new(action: Command, fields: Vec<FieldDescriptor>) -> Self {
        Self { action, fields }
    }

    /// Bind a raw submission to this form, keeping only declared fields
    pub fn bind(&self, raw: HashMap<String, String>) -> FormData {
        let values = raw
            .into_iter()
            .filter(|(key, _)| self.fields.iter().any(|f| f.name == *key))
            .collect();
        FormData { values }
    }
}
