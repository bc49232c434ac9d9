//! Financial aggregation for the dashboard.

use std::collections::BTreeMap;

use bizdash_shared::types::Locale;
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{
    CategoryExpense, DashboardMetrics, DashboardSettings, Kpis, MonthBucket, StatusBreakdown,
};
use crate::records::{CompanySnapshot, Expense, ExpenseCategory, Invoice, InvoiceStatus};

/// Pure aggregation over a company's invoices and expenses.
///
/// Every operation reads borrowed snapshots and returns owned values, so
/// repeated calls with the same inputs give identical results.
pub struct FinancialAggregator;

impl FinancialAggregator {
    /// Computes total revenue, total expenses, and net profit.
    ///
    /// Revenue counts only invoices whose stored status is `Paid`; derived
    /// overdue status plays no part here.
    #[must_use]
    pub fn compute_kpis(invoices: &[Invoice], expenses: &[Expense]) -> Kpis {
        let total_revenue = invoices
            .iter()
            .filter(|invoice| invoice.is_paid())
            .fold(Decimal::ZERO, |total, invoice| add_amount(total, invoice.amount));
        let total_expenses = expenses
            .iter()
            .fold(Decimal::ZERO, |total, expense| add_amount(total, expense.amount));

        Kpis {
            total_revenue,
            total_expenses,
            net_profit: add_amount(total_revenue, -total_expenses),
        }
    }

    /// Buckets paid revenue and expenses into a trailing window of calendar months.
    ///
    /// The window ends with the month containing `reference_date` and holds
    /// `window_months` buckets, oldest first. Paid invoices land in the month
    /// of their issue date, expenses in the month of their date. Records
    /// outside the window or with unparsable dates are left out.
    #[must_use]
    pub fn compute_monthly_series(
        invoices: &[Invoice],
        expenses: &[Expense],
        reference_date: NaiveDate,
        window_months: u32,
        locale: Locale,
    ) -> Vec<MonthBucket> {
        let mut buckets = month_buckets(reference_date, window_months, locale);
        let Some(first) = buckets.first().map(|bucket| bucket.month_start) else {
            return buckets;
        };

        for invoice in invoices.iter().filter(|invoice| invoice.is_paid()) {
            let Some(issued) = invoice.issue_date.date() else {
                warn!(
                    invoice_id = %invoice.id,
                    issue_date = invoice.issue_date.as_str(),
                    "Skipping paid invoice with unparsable issue date"
                );
                continue;
            };
            if let Some(bucket) = bucket_index(first, issued, buckets.len()) {
                buckets[bucket].revenue = add_amount(buckets[bucket].revenue, invoice.amount);
            }
        }

        for expense in expenses {
            let Some(incurred) = expense.date.date() else {
                warn!(
                    expense_id = %expense.id,
                    date = expense.date.as_str(),
                    "Skipping expense with unparsable date"
                );
                continue;
            };
            if let Some(bucket) = bucket_index(first, incurred, buckets.len()) {
                buckets[bucket].expenses = add_amount(buckets[bucket].expenses, expense.amount);
            }
        }

        buckets
    }

    /// Returns the status an invoice should be displayed with at `now`.
    #[must_use]
    pub fn effective_invoice_status(invoice: &Invoice, now: DateTime<Utc>) -> InvoiceStatus {
        invoice.effective_status(now)
    }

    /// Groups invoices by effective status.
    #[must_use]
    pub fn compute_status_breakdown(invoices: &[Invoice], now: DateTime<Utc>) -> StatusBreakdown {
        let mut breakdown = StatusBreakdown::default();
        for invoice in invoices {
            let totals = match invoice.effective_status(now) {
                InvoiceStatus::Paid => &mut breakdown.paid,
                InvoiceStatus::Pending => &mut breakdown.pending,
                InvoiceStatus::Overdue => &mut breakdown.overdue,
            };
            totals.count += 1;
            totals.amount = add_amount(totals.amount, invoice.amount);
        }
        breakdown
    }

    /// Sums expenses per category, largest first.
    ///
    /// Percentages are of total expenses, rounded to 2 decimal places, and
    /// zero when there is nothing to divide.
    #[must_use]
    pub fn compute_expense_breakdown(expenses: &[Expense]) -> Vec<CategoryExpense> {
        let mut per_category: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
        for expense in expenses {
            let slot = per_category.entry(expense.category).or_default();
            *slot = add_amount(*slot, expense.amount);
        }

        let total = per_category
            .values()
            .fold(Decimal::ZERO, |total, amount| add_amount(total, *amount));
        let mut breakdown: Vec<CategoryExpense> = per_category
            .into_iter()
            .map(|(category, amount)| CategoryExpense {
                category,
                amount,
                percent: amount
                    .checked_div(total)
                    .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                    .map_or(Decimal::ZERO, |percent| percent.round_dp(2)),
            })
            .collect();

        breakdown.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });
        breakdown
    }

    /// Builds every dashboard figure for a snapshot at `now`.
    ///
    /// The chart window ends with the UTC month containing `now`.
    #[must_use]
    pub fn build_dashboard(
        snapshot: &CompanySnapshot,
        now: DateTime<Utc>,
        settings: &DashboardSettings,
    ) -> DashboardMetrics {
        let as_of = now.date_naive();
        let kpis = Self::compute_kpis(&snapshot.invoices, &snapshot.expenses);
        let monthly_series = Self::compute_monthly_series(
            &snapshot.invoices,
            &snapshot.expenses,
            as_of,
            settings.window_months,
            settings.locale,
        );
        let status_breakdown = Self::compute_status_breakdown(&snapshot.invoices, now);
        let expenses_by_category = Self::compute_expense_breakdown(&snapshot.expenses);

        debug!(
            company_id = %snapshot.company.id,
            invoices = snapshot.invoices.len(),
            expenses = snapshot.expenses.len(),
            %as_of,
            net_profit = %kpis.net_profit,
            "Dashboard metrics computed"
        );

        DashboardMetrics {
            company_name: snapshot.company.name.clone(),
            as_of,
            currency: settings.currency,
            kpis,
            monthly_series,
            status_breakdown,
            expenses_by_category,
        }
    }
}

/// Adds `amount` to a running total, saturating at the `Decimal` bounds.
fn add_amount(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!(%total, %amount, "Amount total overflowed, saturating");
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Builds zeroed buckets for the window ending at `reference_date`'s month.
fn month_buckets(
    reference_date: NaiveDate,
    window_months: u32,
    locale: Locale,
) -> Vec<MonthBucket> {
    let Some(anchor) = reference_date.with_day(1) else {
        return Vec::new();
    };

    (0..window_months)
        .rev()
        .filter_map(|back| anchor.checked_sub_months(Months::new(back)))
        .map(|month_start| MonthBucket {
            month_label: locale.short_month_name(month_start.month()).to_string(),
            month_start,
            revenue: Decimal::ZERO,
            expenses: Decimal::ZERO,
        })
        .collect()
}

/// Returns the bucket holding `date`, matching on calendar year and month.
fn bucket_index(first_month: NaiveDate, date: NaiveDate, len: usize) -> Option<usize> {
    let offset = month_ordinal(date) - month_ordinal(first_month);
    usize::try_from(offset).ok().filter(|idx| *idx < len)
}

fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
