use thiserror::Error;

/// Startup and configuration errors.
///
/// Request handlers never return this type: generation failures are
/// converted to data in a 200 response at the handler boundary, and the
/// health endpoint builds its own error body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}
