use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the mock backend
/// TCP port the API listens on
/// The real backend binds the same port, so the frontend needs no changes
/// when switching between the two.
pub const PORT: u16 = 3000;

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: installer-mock.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "installer-mock.log".to_string()));

/// Simulation timing configuration
pub mod simulation {
    use super::Duration;

    /// Interval between streamed install progress events (milliseconds)
    pub const PROGRESS_TICK_MS: u64 = 500;

    /// Number of progress events emitted by a full simulated install
    pub const PROGRESS_STEPS: u32 = 10;

    /// Artificial delay before /api/config responds (seconds)
    pub const CONFIG_DELAY_SECS: u64 = 3;

    /// Progress tick duration
    pub fn progress_tick() -> Duration {
        Duration::from_millis(PROGRESS_TICK_MS)
    }

    /// Config response delay duration
    pub fn config_delay() -> Duration {
        Duration::from_secs(CONFIG_DELAY_SECS)
    }
}
