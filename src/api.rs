//! Unified API router for coursekit
//!
//! Wires the settings page into the HTTP surface and acts as the host
//! dispatcher for initialization events.
//!
//! ## Endpoint Map
//!
//! | Route          | Module   | Description                         |
//! |----------------|----------|-------------------------------------|
//! | `/health`      | api      | Load balancer health probe          |
//! | `/api/v1/tabs` | api      | Navigation tabs registered at startup |
//! | `/settings`    | settings | Show (GET) and store (POST) settings |

use crate::events::{HostEvent, TabDefinition};
use crate::modules::Module;
use crate::settings::{settings_router, SettingsPage, SettingsState};
use crate::storage::ConfigStore;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Health probe response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Build the full application router from the host's module list
pub fn api_router(modules: Vec<Arc<dyn Module>>, store: Arc<dyn ConfigStore>) -> Router {
    let (page, event) = SettingsPage::initialize(modules, store);

    let mut tabs = Vec::new();
    match event {
        HostEvent::AddTab { tab } => tabs.push(tab),
        other => tracing::warn!("Unexpected initialization event: {:?}", other),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/tabs", get(list_tabs).with_state(Arc::new(tabs)))
        .merge(settings_router(SettingsState {
            page: Arc::new(page),
        }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/tabs
async fn list_tabs(State(tabs): State<Arc<Vec<TabDefinition>>>) -> Json<Vec<TabDefinition>> {
    Json((*tabs).clone())
}
