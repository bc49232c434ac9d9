//! Company records as read from the persistence layer.
//!
//! This module provides the read-only record model the rest of the crate
//! computes over:
//! - Invoices and their stored status
//! - Expenses and their categories
//! - Clients and the owning company
//! - Lenient decoding of amounts and dates

pub mod amount;
pub mod company;
pub mod date;
pub mod expense;
pub mod invoice;

pub use company::{Client, Company, CompanySnapshot};
pub use date::RecordDate;
pub use expense::{Expense, ExpenseCategory};
pub use invoice::{Invoice, InvoiceStatus};
