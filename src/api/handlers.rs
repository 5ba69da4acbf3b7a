//! Route handlers.
//!
//! Each handler logs a short diagnostic line and answers deterministically
//! from the flag set and fixture data. Request bodies on POST routes are
//! consumed as raw strings (form-encoded and JSON submissions both pass
//! through) and only logged.

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::fixtures;
use super::AppState;
use crate::sim::progress;

/// GET /api/attrs returns fixed product attributes plus the recovery indicator.
pub async fn attrs(State(state): State<AppState>) -> Json<fixtures::InstallerAttrs> {
    log::info!("-- Get attrs");
    Json(fixtures::installer_attrs(state.flags.recovery_mode))
}

/// GET /api/dark-mode returns the theme preference as a bare boolean.
pub async fn dark_mode(State(state): State<AppState>) -> Json<bool> {
    log::info!("-- Get dark mode");
    Json(state.flags.dark_mode)
}

/// GET /api/installation-status returns the fixed install database with
/// the maintenance/launcher flags echoed into the status fields.
pub async fn installation_status(State(state): State<AppState>) -> Json<fixtures::InstallationStatus> {
    log::info!("-- Get installation status");
    Json(fixtures::installation_status(state.flags.maintenance, state.flags.launcher))
}

/// GET /api/default-path returns the fixed suggested install location.
pub async fn default_path() -> Json<fixtures::DefaultPath> {
    log::info!("-- Get default path");
    Json(fixtures::default_path())
}

/// GET /api/package-versions returns the fixed release list. Query
/// parameters are logged but never change the answer.
pub async fn package_versions(uri: Uri) -> Json<Vec<fixtures::PackageVersionInfo>> {
    log::info!("GET VERSIONS: {}", uri);
    Json(fixtures::package_versions())
}

/// GET /api/config returns the package catalog after the simulated fetch
/// delay.
pub async fn config(State(state): State<AppState>) -> Response {
    tokio::time::sleep(state.timing.config_delay).await;

    if state.flags.show_config_error {
        log::info!("-- Get config (simulated failure)");
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({}))).into_response();
    }

    log::info!("-- Get config");
    Json(fixtures::installer_config()).into_response()
}

/// POST /api/start-install logs the submitted options, then streams
/// newline-delimited progress events until the simulated run completes.
pub async fn start_install(State(state): State<AppState>, body: String) -> Body {
    log::info!("-- Install:");
    log::info!("{}", body);
    Body::from_stream(progress::progress_lines(state.flags.show_error, state.timing.progress_tick))
}

/// GET /api/exit acknowledges the frontend shutting down.
pub async fn exit(State(state): State<AppState>) -> Response {
    log::info!("-- Exit");
    if state.flags.show_error {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Simulated error: Nothing to see here.").into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

/// POST /api/verify-path answers from the flag set; the submitted path is
/// ignored.
pub async fn verify_path(State(state): State<AppState>, body: String) -> Json<fixtures::PathVerification> {
    log::info!("-- Verify Path: {}", body);
    Json(fixtures::PathVerification {
        exists: state.flags.file_exists,
    })
}

/// POST /api/check-auth is a fake credentials check; always authenticated.
pub async fn check_auth(body: String) -> Json<fixtures::AuthenticatedUser> {
    log::info!("-- Check Authorization: {}", body);
    Json(fixtures::authenticated_user())
}
