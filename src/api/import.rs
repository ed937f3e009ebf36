//! Record import endpoint
//!
//! POST /import-record turns one HTTP call into one tool invocation:
//! validate the form, stage the XML to a temp file, run the tool, map
//! its exit status, clean up, respond. No state survives the response.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::staging::StagedPayload;
use crate::AppState;

/// Form fields of one import request
///
/// Everything is optional at the serde layer so that missing fields
/// reach our own validation instead of a generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub identifier: Option<String>,
    #[serde(rename = "metadataPrefix")]
    pub metadata_prefix: Option<String>,
    pub content: Option<String>,
}

/// Body returned once the tool has actually run
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub status: String,
    pub identifier: String,
    /// Tool's combined stdout/stderr, verbatim
    pub output: String,
}

/// POST /import-record
pub async fn import_record(
    State(state): State<AppState>,
    Form(request): Form<ImportRequest>,
) -> Response {
    // Empty strings count as missing, same as absent fields
    let identifier = match request.identifier.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return missing_parameters(),
    };
    let content = match request.content.as_deref() {
        Some(xml) if !xml.is_empty() => xml,
        _ => return missing_parameters(),
    };
    let metadata_prefix = match request.metadata_prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => state.config.default_metadata_prefix.as_str(),
    };

    info!(
        identifier = %identifier,
        metadata_prefix = %metadata_prefix,
        content_len = content.len(),
        "Import request"
    );

    // Guard drops at the end of this function on every path below
    let staged = match StagedPayload::write(&state.config.temp_dir, content).await {
        Ok(staged) => staged,
        Err(e) => {
            warn!(identifier = %identifier, error = %e, "Failed to stage payload");
            return local_failure(&e.to_string());
        }
    };

    match state
        .tool
        .add_record(identifier, metadata_prefix, staged.path())
        .await
    {
        Ok(outcome) if outcome.success => {
            info!(identifier = %identifier, "Record imported");
            (
                StatusCode::OK,
                Json(ImportResponse {
                    status: "success".to_string(),
                    identifier: identifier.to_string(),
                    output: outcome.output,
                }),
            )
                .into_response()
        }
        Ok(outcome) => {
            warn!(
                identifier = %identifier,
                exit_code = ?outcome.exit_code,
                "Record tool rejected import"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ImportResponse {
                    status: "error".to_string(),
                    identifier: identifier.to_string(),
                    output: outcome.output,
                }),
            )
                .into_response()
        }
        Err(e) => {
            warn!(identifier = %identifier, error = %e, "Record tool invocation failed");
            local_failure(&e.to_string())
        }
    }
}

/// Fallback for any non-POST method on /import-record
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

fn missing_parameters() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing required parameters" })),
    )
        .into_response()
}

/// 500 for failures local to the gateway (staging, spawn, timeout)
fn local_failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "message": message })),
    )
        .into_response()
}
