//! Invoice records.

use bizdash_shared::types::{ClientId, InvoiceId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;
use super::date::RecordDate;

/// Invoice status as stored.
///
/// Legacy documents carry the French labels, which decode to the same variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Payment received.
    #[serde(alias = "Payée", alias = "Paid")]
    Paid,
    /// Awaiting payment.
    #[serde(alias = "En attente", alias = "Pending")]
    Pending,
    /// Past due without payment.
    #[serde(alias = "En retard", alias = "Overdue")]
    Overdue,
}

impl InvoiceStatus {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice issued to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Human-facing invoice number.
    #[serde(default)]
    pub invoice_number: String,
    /// Client the invoice was issued to.
    #[serde(default)]
    pub client_id: Option<ClientId>,
    /// Client display name captured when the invoice was created.
    ///
    /// This is a snapshot, not a live join: renaming the client later does not
    /// update past invoices.
    #[serde(default)]
    pub client_name: String,
    /// Invoice total.
    #[serde(default, deserialize_with = "amount::lenient")]
    pub amount: Decimal,
    /// Stored status.
    pub status: InvoiceStatus,
    /// Date the invoice was issued.
    #[serde(default)]
    pub issue_date: RecordDate,
    /// Date payment is due.
    #[serde(default)]
    pub due_date: RecordDate,
}

impl Invoice {
    /// Returns true if the stored status is `Paid`.
    ///
    /// Revenue is recognized from this flag only, never from derived status.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// Returns the status to display at `now`.
    ///
    /// A `Pending` invoice becomes `Overdue` once `now` falls on a calendar day
    /// (UTC) after its due date. Every other stored status is returned as is,
    /// and so is `Pending` when the due date cannot be parsed.
    #[must_use]
    pub fn effective_status(&self, now: DateTime<Utc>) -> InvoiceStatus {
        match (self.status, self.due_date.date()) {
            (InvoiceStatus::Pending, Some(due)) if now.date_naive() > due => {
                InvoiceStatus::Overdue
            }
            (status, _) => status,
        }
    }
}
