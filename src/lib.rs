//! oai-gateway library - HTTP import gateway for an OAI-PMH repository
//!
//! Accepts one metadata record per POST, stages its XML payload to a
//! uniquely named temp file, invokes the external record-management
//! tool with a pure argv array, and reports the tool's verdict back as
//! JSON. Requests are fully independent; the gateway keeps no state
//! between them.

use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod staging;
pub mod tool;

pub use config::Config;
pub use error::{Error, Result};
pub use tool::RecordTool;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tool: RecordTool,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let tool = RecordTool::new(&config);
        Self {
            config: Arc::new(config),
            tool,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/import-record",
            post(api::import_record).fallback(api::method_not_allowed),
        )
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
