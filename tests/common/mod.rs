//! Common test utilities
//!
//! This module is shared across all integration tests

use std::time::Duration;

use installer_mock::api::{build_router, AppState, SimTiming};
use installer_mock::sim::SimFlags;

/// Delays short enough that the timed endpoints don't slow the suite down.
pub fn fast_timing() -> SimTiming {
    SimTiming {
        progress_tick: Duration::from_millis(5),
        config_delay: Duration::from_millis(20),
    }
}

/// Serve the mock on an ephemeral port and return its base URL.
pub async fn spawn_server(flags: SimFlags) -> String {
    let state = AppState::with_timing(flags, fast_timing());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("serve mock api");
    });

    format!("http://{}", addr)
}

/// Flag set built from startup tokens, exactly as `main` would.
#[allow(dead_code)]
pub fn flags_from(tokens: &[&str]) -> SimFlags {
    SimFlags::from_tokens(tokens.iter().copied())
}
