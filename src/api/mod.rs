//! HTTP surface of the mock installer backend.
//!
//! One axum router, ten fixed routes, no authentication. Handlers answer
//! from the simulation flags and fixture data alone; unknown routes fall
//! through to the framework's 404.

pub mod fixtures;
pub mod handlers;

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::core::config::simulation;
use crate::core::AppResult;
use crate::sim::SimFlags;

/// Delays driving the simulated long-running operations.
#[derive(Debug, Clone, Copy)]
pub struct SimTiming {
    /// Pause between streamed install progress events.
    pub progress_tick: Duration,
    /// Pause before /api/config answers.
    pub config_delay: Duration,
}

impl Default for SimTiming {
    fn default() -> Self {
        Self {
            progress_tick: simulation::progress_tick(),
            config_delay: simulation::config_delay(),
        }
    }
}

/// Shared state for all endpoints.
///
/// Written once at startup and read-only in handlers, so the per-request
/// clone needs no synchronization.
#[derive(Debug, Clone)]
pub struct AppState {
    pub flags: SimFlags,
    pub timing: SimTiming,
}

impl AppState {
    pub fn new(flags: SimFlags) -> Self {
        Self {
            flags,
            timing: SimTiming::default(),
        }
    }

    /// State with custom delays. Integration tests use short ones so the
    /// timed endpoints don't slow the suite down.
    pub fn with_timing(flags: SimFlags, timing: SimTiming) -> Self {
        Self { flags, timing }
    }
}

/// Build the mock API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/attrs", get(handlers::attrs))
        .route("/api/dark-mode", get(handlers::dark_mode))
        .route("/api/installation-status", get(handlers::installation_status))
        .route("/api/default-path", get(handlers::default_path))
        .route("/api/package-versions", get(handlers::package_versions))
        .route("/api/config", get(handlers::config))
        .route("/api/start-install", post(handlers::start_install))
        .route("/api/exit", get(handlers::exit))
        .route("/api/verify-path", post(handlers::verify_path))
        .route("/api/check-auth", post(handlers::check_auth))
        .with_state(state)
}

/// Bind the fixed port and serve until the process is terminated.
pub async fn start_server(port: u16, state: AppState) -> AppResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(state);

    log::info!("Listening on {}...", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
