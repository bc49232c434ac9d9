//! Sorting for invoice, client, and expense lists.
//!
//! Sorts never touch the snapshot: they return references in display order.
//! All sorts are stable, so equal keys keep their stored order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{Client, Expense, Invoice, InvoiceStatus, RecordDate};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Invoice list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceSortKey {
    /// Issue date.
    IssueDate,
    /// Due date.
    DueDate,
    /// Amount.
    Amount,
    /// Client name snapshot.
    ClientName,
    /// Invoice number.
    InvoiceNumber,
    /// Effective status.
    Status,
}

/// Client list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientSortKey {
    /// Name.
    Name,
    /// Email, missing sorting as empty.
    Email,
}

/// Expense list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSortKey {
    /// Date incurred.
    Date,
    /// Amount.
    Amount,
    /// Category.
    Category,
    /// Description.
    Description,
}

/// Current sort column and direction of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig<K> {
    /// Column.
    pub key: K,
    /// Direction.
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortConfig<K> {
    /// Creates a sort config.
    #[must_use]
    pub const fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Applies a click on a column header.
    ///
    /// Clicking the current column while ascending flips to descending; any
    /// other click sorts ascending by the clicked column.
    #[must_use]
    pub fn toggle(self, key: K) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

impl Default for SortConfig<InvoiceSortKey> {
    fn default() -> Self {
        Self::new(InvoiceSortKey::IssueDate, SortDirection::Descending)
    }
}

impl Default for SortConfig<ClientSortKey> {
    fn default() -> Self {
        Self::new(ClientSortKey::Name, SortDirection::Ascending)
    }
}

impl Default for SortConfig<ExpenseSortKey> {
    fn default() -> Self {
        Self::new(ExpenseSortKey::Date, SortDirection::Descending)
    }
}

/// Returns invoices in display order.
///
/// Status sorts by effective status at `now`, most urgent first when ascending:
/// overdue, then pending, then paid.
#[must_use]
pub fn sorted_invoices(
    invoices: &[Invoice],
    config: SortConfig<InvoiceSortKey>,
    now: DateTime<Utc>,
) -> Vec<&Invoice> {
    let mut rows: Vec<&Invoice> = invoices.iter().collect();
    rows.sort_by(|a, b| {
        let ordering = match config.key {
            InvoiceSortKey::IssueDate => compare_dates(&a.issue_date, &b.issue_date),
            InvoiceSortKey::DueDate => compare_dates(&a.due_date, &b.due_date),
            InvoiceSortKey::Amount => a.amount.cmp(&b.amount),
            InvoiceSortKey::ClientName => compare_text(&a.client_name, &b.client_name),
            InvoiceSortKey::InvoiceNumber => compare_text(&a.invoice_number, &b.invoice_number),
            InvoiceSortKey::Status => {
                status_rank(a.effective_status(now)).cmp(&status_rank(b.effective_status(now)))
            }
        };
        config.direction.apply(ordering)
    });
    rows
}

/// Returns clients in display order.
#[must_use]
pub fn sorted_clients(clients: &[Client], config: SortConfig<ClientSortKey>) -> Vec<&Client> {
    let mut rows: Vec<&Client> = clients.iter().collect();
    rows.sort_by(|a, b| {
        let ordering = match config.key {
            ClientSortKey::Name => compare_text(&a.name, &b.name),
            ClientSortKey::Email => compare_text(
                a.email.as_deref().unwrap_or_default(),
                b.email.as_deref().unwrap_or_default(),
            ),
        };
        config.direction.apply(ordering)
    });
    rows
}

/// Returns expenses in display order.
#[must_use]
pub fn sorted_expenses(expenses: &[Expense], config: SortConfig<ExpenseSortKey>) -> Vec<&Expense> {
    let mut rows: Vec<&Expense> = expenses.iter().collect();
    rows.sort_by(|a, b| {
        let ordering = match config.key {
            ExpenseSortKey::Date => compare_dates(&a.date, &b.date),
            ExpenseSortKey::Amount => a.amount.cmp(&b.amount),
            ExpenseSortKey::Category => a.category.as_str().cmp(b.category.as_str()),
            ExpenseSortKey::Description => compare_text(&a.description, &b.description),
        };
        config.direction.apply(ordering)
    });
    rows
}

/// Unparsable dates order before every valid one.
fn compare_dates(a: &RecordDate, b: &RecordDate) -> Ordering {
    a.instant().cmp(&b.instant())
}

/// Case-insensitive, falling back to exact comparison to stay total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

const fn status_rank(status: InvoiceStatus) -> u8 {
    match status {
        InvoiceStatus::Overdue => 0,
        InvoiceStatus::Pending => 1,
        InvoiceStatus::Paid => 2,
    }
}
