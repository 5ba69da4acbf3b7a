use thiserror::Error;

/// Centralized error types for the application
///
/// Handlers themselves are infallible (every request is answered from
/// fixture data); these variants cover the startup path.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO errors (socket bind, log file creation)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
