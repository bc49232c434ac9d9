//! Report error types.

use bizdash_shared::AppError;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Records could not be serialized into the prompt payload.
    #[error("Failed to serialize records: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The text generator failed or returned nothing usable.
    #[error("Report generation failed: {0}")]
    Generation(String),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Serialization(_) => Self::Internal(err.to_string()),
            ReportError::Generation(_) => Self::ExternalService(err.to_string()),
        }
    }
}
