//! HTTP handlers for the settings page
//!
//! Binds the two user-facing commands to routes:
//! - GET  /settings — render the composite settings form
//! - POST /settings — persist a submission, redirect back to the form
//!
//! This layer is the host dispatcher: it consumes the events the page
//! raises and turns them into HTTP responses.

use crate::error::Error;
use crate::events::{HostEvent, UiData};
use crate::settings::SettingsPage;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Shared state for settings handlers
#[derive(Clone)]
pub struct SettingsState {
    pub page: Arc<SettingsPage>,
}

/// Create the settings router
pub fn settings_router(state: SettingsState) -> Router {
    Router::new()
        .route("/settings", get(show_settings).post(store_settings))
        .with_state(state)
}

/// GET /settings
async fn show_settings(State(state): State<SettingsState>) -> Response {
    match state.page.show().await {
        Ok(HostEvent::SetUi { ui }) => Html(page_shell(&ui)).into_response(),
        Ok(other) => unexpected_event(other),
        Err(e) => error_response(e),
    }
}

/// POST /settings
async fn store_settings(
    State(state): State<SettingsState>,
    Form(submission): Form<HashMap<String, String>>,
) -> Response {
    match state.page.store(submission).await {
        Ok(HostEvent::Redirect { command }) => Redirect::to(command.path()).into_response(),
        Ok(other) => unexpected_event(other),
        Err(e) => error_response(e),
    }
}

fn page_shell(ui: &UiData) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n{markup}</body>\n</html>\n",
        title = ui.title,
        markup = ui.markup
    )
}

fn error_response(err: Error) -> Response {
    let status = match err {
        Error::FieldParse { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!("Settings request failed: {}", err);
    (status, err.to_string()).into_response()
}

fn unexpected_event(event: HostEvent) -> Response {
    tracing::error!("Unexpected event from settings page: {:?}", event);
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
