//! Dashboard metrics.
//!
//! This module provides the financial aggregation behind the dashboard:
//! - Key financial metrics (revenue, expenses, net profit)
//! - Month-bucketed revenue vs expenses chart
//! - Invoice totals by effective status
//! - Expenses by category

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::FinancialAggregator;
pub use types::*;
