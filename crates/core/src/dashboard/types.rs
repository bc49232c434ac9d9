//! Dashboard data types.

use bizdash_shared::AppConfig;
use bizdash_shared::types::{Currency, Locale};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::ExpenseCategory;

/// Scalar financial KPIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Sum of paid invoice amounts.
    pub total_revenue: Decimal,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// Revenue minus expenses. May be negative.
    pub net_profit: Decimal,
}

/// One calendar month of the revenue/expense chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Short month name in the display locale.
    pub month_label: String,
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Paid invoice amounts issued this month.
    pub revenue: Decimal,
    /// Expense amounts incurred this month.
    pub expenses: Decimal,
}

/// Count and amount of invoices sharing an effective status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    /// Number of invoices.
    pub count: usize,
    /// Sum of their amounts.
    pub amount: Decimal,
}

/// Invoices grouped by effective status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// Paid invoices.
    pub paid: StatusTotals,
    /// Pending invoices not yet past due.
    pub pending: StatusTotals,
    /// Overdue invoices, stored or derived.
    pub overdue: StatusTotals,
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// Category.
    pub category: ExpenseCategory,
    /// Expense amount.
    pub amount: Decimal,
    /// Percentage of total expenses.
    pub percent: Decimal,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Company name.
    pub company_name: String,
    /// Date the metrics were computed for.
    pub as_of: NaiveDate,
    /// Display currency.
    pub currency: Currency,
    /// KPI cards.
    pub kpis: Kpis,
    /// Revenue vs expenses chart, oldest month first.
    pub monthly_series: Vec<MonthBucket>,
    /// Invoice counts by effective status.
    pub status_breakdown: StatusBreakdown,
    /// Expenses by category, largest first.
    pub expenses_by_category: Vec<CategoryExpense>,
}

/// Knobs for building dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Number of months in the chart.
    pub window_months: u32,
    /// Locale for month labels.
    pub locale: Locale,
    /// Display currency.
    pub currency: Currency,
}

impl From<&AppConfig> for DashboardSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            window_months: config.dashboard.window_months,
            locale: config.display.locale,
            currency: config.display.currency,
        }
    }
}
