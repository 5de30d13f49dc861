//! Host command and event objects
//!
//! Page operations return [`HostEvent`] values instead of calling into a
//! global event bus; the HTTP layer acts as the dispatcher that consumes
//! them.

mod types;

pub use types::{Command, HostEvent, TabDefinition, UiData};
