//! Invoice status transitions.
//!
//! ```text
//! Pending --mark as paid--> Paid
//! Pending --due date passes--> Overdue --mark as paid--> Paid
//! ```
//!
//! `Paid` is terminal.

use crate::records::{Invoice, InvoiceStatus};

use super::error::InvoiceError;

/// Validates a stored status change.
///
/// # Errors
///
/// Returns `InvoiceError::InvalidStatusTransition` for any change out of
/// `Paid` and for `Overdue -> Pending`.
pub fn validate_status_transition(
    from: InvoiceStatus,
    to: InvoiceStatus,
) -> Result<(), InvoiceError> {
    let valid = match (from, to) {
        _ if from == to => true,
        (InvoiceStatus::Pending, InvoiceStatus::Paid | InvoiceStatus::Overdue)
        | (InvoiceStatus::Overdue, InvoiceStatus::Paid) => true,
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(InvoiceError::InvalidStatusTransition { from, to })
    }
}

/// Returns true if the "mark as paid" action applies to this invoice.
#[must_use]
pub fn can_mark_as_paid(invoice: &Invoice) -> bool {
    !invoice.is_paid()
}

/// Returns a copy of the invoice with its stored status set to `Paid`.
///
/// # Errors
///
/// Returns `InvoiceError::InvalidStatusTransition` if the invoice is already paid.
pub fn mark_as_paid(invoice: &Invoice) -> Result<Invoice, InvoiceError> {
    if invoice.is_paid() {
        return Err(InvoiceError::InvalidStatusTransition {
            from: InvoiceStatus::Paid,
            to: InvoiceStatus::Paid,
        });
    }
    validate_status_transition(invoice.status, InvoiceStatus::Paid)?;

    Ok(Invoice {
        status: InvoiceStatus::Paid,
        ..invoice.clone()
    })
}
