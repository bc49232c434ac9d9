//! Report data types.

use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::records::{Expense, Invoice};

/// Records serialized for the report prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// JSON array of all invoices.
    pub invoices: String,
    /// JSON array of all expenses.
    pub expenses: String,
    /// Whether both collections were empty.
    pub is_empty: bool,
}

impl ReportRequest {
    /// Serializes both collections as JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Serialization` if a record cannot be serialized.
    pub fn from_records(invoices: &[Invoice], expenses: &[Expense]) -> Result<Self, ReportError> {
        Ok(Self {
            invoices: serde_json::to_string(invoices)?,
            expenses: serde_json::to_string(expenses)?,
            is_empty: invoices.is_empty() && expenses.is_empty(),
        })
    }
}

/// Outcome of a report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// Report body as returned by the generator, or the no-data notice.
    pub body: String,
    /// False when the body is the no-data notice.
    pub generated: bool,
}
