//! Installer Mock - canned HTTP backend for installer UI development
//!
//! This library implements a development-time stand-in for the real
//! installer backend: the fixed route table the frontend talks to,
//! answered from fixture data and a set of simulation flags parsed from
//! startup tokens.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `sim`: simulation flags and the install progress stream
//! - `api`: axum state, router, and route handlers

pub mod api;
pub mod cli;
pub mod core;
pub mod sim;

// Re-export commonly used types for convenience
pub use api::{build_router, start_server, AppState, SimTiming};
pub use core::{config, AppError, AppResult};
pub use sim::SimFlags;
