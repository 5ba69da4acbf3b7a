//! Timer-driven install progress simulation.
//!
//! A simulated install run is a stream of newline-delimited JSON events,
//! one per tick, that the HTTP layer hands to its streaming response body.
//! Each request gets its own stream and its own counter; nothing is shared
//! between concurrent runs.

use std::convert::Infallible;
use std::time::Duration;

use futures_util::future::Either;
use futures_util::stream::{self, Stream};
use serde::Serialize;

use crate::core::config::simulation::PROGRESS_STEPS;

/// One line of the streamed install response.
///
/// External tagging gives the wire shapes the frontend expects:
/// `{"Status":["Processing...",0.1]}` and `{"Error":"..."}`.
#[derive(Debug, Clone, Serialize)]
pub enum ProgressEvent {
    /// Install failed; terminal.
    Error(String),
    /// Progress message plus completed fraction in [0, 1).
    Status(String, f64),
}

impl ProgressEvent {
    /// Newline-terminated JSON encoding of the event.
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).unwrap_or_default();
        line.push('\n');
        line
    }
}

/// Build the line stream for one simulated install run.
///
/// In error mode the run short-circuits to a single error line. Otherwise
/// one status line is produced per `tick`, counting up from 0.0 in steps
/// of 1/`PROGRESS_STEPS` until the run completes.
pub fn progress_lines(show_error: bool, tick: Duration) -> impl Stream<Item = Result<String, Infallible>> {
    if show_error {
        let line = ProgressEvent::Error("Simulated error.".to_string()).to_line();
        return Either::Left(stream::iter(vec![Ok::<String, Infallible>(line)]));
    }

    Either::Right(stream::unfold(0u32, move |step| async move {
        if step >= PROGRESS_STEPS {
            return None;
        }
        tokio::time::sleep(tick).await;
        let fraction = f64::from(step) / f64::from(PROGRESS_STEPS);
        let line = ProgressEvent::Status("Processing...".to_string(), fraction).to_line();
        Some((Ok::<String, Infallible>(line), step + 1))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use pretty_assertions::assert_eq;

    async fn collect_lines(show_error: bool) -> Vec<String> {
        progress_lines(show_error, Duration::from_millis(1))
            .map(|line| line.unwrap())
            .collect()
            .await
    }

    #[test]
    fn test_status_event_wire_shape() {
        let event = ProgressEvent::Status("Processing...".to_string(), 0.0);
        assert_eq!(event.to_line(), "{\"Status\":[\"Processing...\",0.0]}\n");
    }

    #[test]
    fn test_error_event_wire_shape() {
        let event = ProgressEvent::Error("Simulated error.".to_string());
        assert_eq!(event.to_line(), "{\"Error\":\"Simulated error.\"}\n");
    }

    #[tokio::test]
    async fn test_full_run_emits_ten_ascending_status_lines() {
        let lines = collect_lines(false).await;
        assert_eq!(lines.len(), 10);

        for (i, line) in lines.iter().enumerate() {
            let event: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
            let status = event.get("Status").expect("line should be a Status event");
            assert_eq!(status[0], "Processing...");
            let fraction = status[1].as_f64().unwrap();
            assert!((fraction - i as f64 / 10.0).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn test_fractions_serialize_as_exact_decimals() {
        let lines = collect_lines(false).await;
        assert_eq!(lines[0], "{\"Status\":[\"Processing...\",0.0]}\n");
        assert_eq!(lines[3], "{\"Status\":[\"Processing...\",0.3]}\n");
        assert_eq!(lines[9], "{\"Status\":[\"Processing...\",0.9]}\n");
    }

    #[tokio::test]
    async fn test_error_mode_emits_single_error_line() {
        let lines = collect_lines(true).await;
        assert_eq!(lines, vec!["{\"Error\":\"Simulated error.\"}\n".to_string()]);
    }
}
