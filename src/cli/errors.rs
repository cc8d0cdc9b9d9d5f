use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
