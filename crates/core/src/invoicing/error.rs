//! Invoice error types.

use bizdash_shared::AppError;
use thiserror::Error;

use crate::records::InvoiceStatus;

/// Invoice-related errors.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Requested status change is not part of the lifecycle.
    #[error("Invalid invoice status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: InvoiceStatus,
        /// Requested status.
        to: InvoiceStatus,
    },
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
