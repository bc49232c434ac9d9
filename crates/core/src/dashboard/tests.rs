//! Property-based tests for dashboard module.

use bizdash_shared::types::{ExpenseId, InvoiceId, Locale};
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::FinancialAggregator;
use crate::records::{Expense, ExpenseCategory, Invoice, InvoiceStatus, RecordDate};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

fn status_strategy() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Pending),
        Just(InvoiceStatus::Overdue),
    ]
}

/// Invoices with cent amounts and issue dates spread over 2022-2024.
fn invoice_strategy() -> impl Strategy<Value = Invoice> {
    (0i64..10_000_000, status_strategy(), 0i64..1096, 0i64..90).prop_map(
        |(cents, status, issue_offset, term)| {
            let issued = base_date() + Duration::days(issue_offset);
            Invoice {
                id: InvoiceId::new(format!("inv-{issue_offset}-{cents}")),
                invoice_number: String::new(),
                client_id: None,
                client_name: String::new(),
                amount: Decimal::new(cents, 2),
                status,
                issue_date: RecordDate::from(issued),
                due_date: RecordDate::from(issued + Duration::days(term)),
            }
        },
    )
}

fn expense_strategy() -> impl Strategy<Value = Expense> {
    (0i64..10_000_000, 0i64..1096).prop_map(|(cents, offset)| Expense {
        id: ExpenseId::new(format!("exp-{offset}-{cents}")),
        description: String::new(),
        category: ExpenseCategory::Other,
        amount: Decimal::new(cents, 2),
        date: RecordDate::from(base_date() + Duration::days(offset)),
        receipt_url: None,
    })
}

proptest! {
    /// Net profit is exactly revenue minus expenses.
    #[test]
    fn test_net_profit_identity(
        invoices in prop::collection::vec(invoice_strategy(), 0..30),
        expenses in prop::collection::vec(expense_strategy(), 0..30),
    ) {
        let kpis = FinancialAggregator::compute_kpis(&invoices, &expenses);
        prop_assert_eq!(kpis.net_profit, kpis.total_revenue - kpis.total_expenses);
    }

    /// Flipping an invoice between non-paid statuses never moves revenue.
    #[test]
    fn test_non_paid_status_does_not_affect_revenue(
        mut invoices in prop::collection::vec(invoice_strategy(), 1..30),
        idx in any::<prop::sample::Index>(),
    ) {
        let target = idx.index(invoices.len());
        prop_assume!(!invoices[target].is_paid());

        let before = FinancialAggregator::compute_kpis(&invoices, &[]).total_revenue;
        invoices[target].status = match invoices[target].status {
            InvoiceStatus::Pending => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Pending,
        };
        let after = FinancialAggregator::compute_kpis(&invoices, &[]).total_revenue;

        prop_assert_eq!(before, after);
    }

    /// Charted revenue never exceeds total revenue, and matches it when every
    /// paid invoice falls inside the window.
    #[test]
    fn test_series_revenue_bounded_by_total(
        invoices in prop::collection::vec(invoice_strategy(), 0..30),
        reference_offset in 0i64..1096,
        window in 1u32..24,
    ) {
        let reference = base_date() + Duration::days(reference_offset);
        let series = FinancialAggregator::compute_monthly_series(
            &invoices, &[], reference, window, Locale::En,
        );
        let charted: Decimal = series.iter().map(|b| b.revenue).sum();
        let total = FinancialAggregator::compute_kpis(&invoices, &[]).total_revenue;

        prop_assert!(charted <= total);

        let first = series[0].month_start;
        let all_inside = invoices
            .iter()
            .filter(|inv| inv.is_paid())
            .filter_map(|inv| inv.issue_date.date())
            .all(|d| d >= first && d <= reference);
        if all_inside {
            prop_assert_eq!(charted, total);
        }
    }

    /// The series always has one bucket per month, consecutive and oldest first,
    /// ending with the reference month.
    #[test]
    fn test_series_shape(
        reference_offset in 0i64..3650,
        window in 0u32..36,
    ) {
        let reference = base_date() + Duration::days(reference_offset);
        let series = FinancialAggregator::compute_monthly_series(
            &[], &[], reference, window, Locale::Fr,
        );

        prop_assert_eq!(series.len(), window as usize);
        if let Some(last) = series.last() {
            prop_assert_eq!(last.month_start.year(), reference.year());
            prop_assert_eq!(last.month_start.month(), reference.month());
        }
        for pair in series.windows(2) {
            prop_assert_eq!(pair[0].month_start.day(), 1);
            prop_assert_eq!(
                pair[0].month_start.checked_add_months(chrono::Months::new(1)),
                Some(pair[1].month_start)
            );
        }
    }

    /// Same inputs, same outputs.
    #[test]
    fn test_aggregation_is_idempotent(
        invoices in prop::collection::vec(invoice_strategy(), 0..20),
        expenses in prop::collection::vec(expense_strategy(), 0..20),
        reference_offset in 0i64..1096,
    ) {
        let reference = base_date() + Duration::days(reference_offset);
        let now = Utc.from_utc_datetime(&reference.and_hms_opt(12, 0, 0).unwrap());

        prop_assert_eq!(
            FinancialAggregator::compute_kpis(&invoices, &expenses),
            FinancialAggregator::compute_kpis(&invoices, &expenses)
        );
        let series = |locale| {
            FinancialAggregator::compute_monthly_series(&invoices, &expenses, reference, 6, locale)
        };
        prop_assert_eq!(series(Locale::En), series(Locale::En));
        prop_assert_eq!(
            FinancialAggregator::compute_status_breakdown(&invoices, now),
            FinancialAggregator::compute_status_breakdown(&invoices, now)
        );
    }

    /// Effective status only ever turns Pending into Overdue.
    #[test]
    fn test_effective_status_only_derives_overdue(
        invoice in invoice_strategy(),
        now_offset in 0i64..1500,
    ) {
        let now = Utc.from_utc_datetime(
            &(base_date() + Duration::days(now_offset)).and_hms_opt(0, 0, 0).unwrap(),
        );
        let effective = FinancialAggregator::effective_invoice_status(&invoice, now);

        if effective != invoice.status {
            prop_assert_eq!(invoice.status, InvoiceStatus::Pending);
            prop_assert_eq!(effective, InvoiceStatus::Overdue);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::dashboard::types::DashboardSettings;
    use crate::records::{Company, CompanySnapshot};
    use bizdash_shared::AppConfig;
    use bizdash_shared::types::{CompanyId, Currency};
    use rust_decimal_macros::dec;

    fn default_settings() -> DashboardSettings {
        DashboardSettings::from(&AppConfig::default())
    }

    fn snapshot() -> CompanySnapshot {
        let json = r#"{
            "company": {"id": "co1", "name": "Diallo SARL"},
            "invoices": [
                {"id": "i1", "amount": 100, "status": "Payée",
                 "issueDate": "2024-05-01T09:00:00.000Z", "dueDate": "2024-05-31T00:00:00.000Z"},
                {"id": "i2", "amount": 50, "status": "En attente",
                 "issueDate": "2023-12-01T09:00:00.000Z", "dueDate": "2024-01-01T00:00:00.000Z"},
                {"id": "i3", "amount": "oops", "status": "Payée",
                 "issueDate": "2024-06-01T09:00:00.000Z", "dueDate": "2024-06-30T00:00:00.000Z"}
            ],
            "expenses": [
                {"id": "e1", "description": "Flyers", "category": "Marketing",
                 "amount": 30, "date": "2024-05-01T00:00:00.000Z"}
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_dashboard() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let settings = DashboardSettings {
            window_months: 6,
            locale: Locale::Fr,
            currency: Currency::Xof,
        };

        let metrics = FinancialAggregator::build_dashboard(&snapshot(), now, &settings);

        assert_eq!(metrics.company_name, "Diallo SARL");
        assert_eq!(metrics.as_of, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(metrics.kpis.total_revenue, dec!(100));
        assert_eq!(metrics.kpis.total_expenses, dec!(30));
        assert_eq!(metrics.kpis.net_profit, dec!(70));

        assert_eq!(metrics.monthly_series.len(), 6);
        assert_eq!(metrics.monthly_series[4].month_label, "Mai");
        assert_eq!(metrics.monthly_series[4].revenue, dec!(100));
        assert_eq!(metrics.monthly_series[4].expenses, dec!(30));
        assert_eq!(metrics.monthly_series[5].month_label, "Juin");
        assert_eq!(metrics.monthly_series[5].revenue, Decimal::ZERO);

        assert_eq!(metrics.status_breakdown.paid.count, 2);
        assert_eq!(metrics.status_breakdown.overdue.count, 1);
        assert_eq!(metrics.status_breakdown.overdue.amount, dec!(50));

        assert_eq!(metrics.expenses_by_category.len(), 1);
        assert_eq!(metrics.expenses_by_category[0].category, ExpenseCategory::Marketing);
        assert_eq!(metrics.expenses_by_category[0].percent, dec!(100));
    }

    #[test]
    fn test_build_dashboard_empty_company() {
        let snapshot = CompanySnapshot {
            company: Company {
                id: CompanyId::new("co2"),
                name: "Nouvelle Entreprise".to_string(),
                creation_date: None,
                address: None,
                phone: None,
                contact_email: None,
                tax_id: None,
            },
            clients: Vec::new(),
            invoices: Vec::new(),
            expenses: Vec::new(),
        };
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();

        let metrics =
            FinancialAggregator::build_dashboard(&snapshot, now, &default_settings());

        assert_eq!(metrics.kpis.net_profit, Decimal::ZERO);
        assert_eq!(metrics.monthly_series.len(), 6);
        assert!(metrics.expenses_by_category.is_empty());
        assert_eq!(metrics.status_breakdown.paid.count, 0);
    }

    #[test]
    fn test_huge_paid_invoices_saturate_totals() {
        let json = r#"{
            "company": {"id": "co3", "name": "Grosse Affaire"},
            "invoices": [
                {"id": "i1", "amount": "50000000000000000000000000000", "status": "Payée",
                 "issueDate": "2024-05-01", "dueDate": "2024-05-31"},
                {"id": "i2", "amount": "50000000000000000000000000000", "status": "Payée",
                 "issueDate": "2024-05-02", "dueDate": "2024-06-01"}
            ],
            "expenses": [
                {"id": "e1", "category": "Logiciels", "amount": 10, "date": "2024-05-03"}
            ]
        }"#;
        let snapshot: CompanySnapshot = serde_json::from_str(json).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let metrics =
            FinancialAggregator::build_dashboard(&snapshot, now, &default_settings());

        assert_eq!(metrics.kpis.total_revenue, Decimal::MAX);
        assert_eq!(metrics.kpis.net_profit, Decimal::MAX - dec!(10));
        assert_eq!(metrics.monthly_series[4].revenue, Decimal::MAX);
        assert_eq!(metrics.status_breakdown.paid.amount, Decimal::MAX);
    }

    #[test]
    fn test_negative_expense_does_not_inflate_profit() {
        let json = r#"{
            "company": {"id": "co4", "name": "Atelier Sow"},
            "invoices": [
                {"id": "i1", "amount": 100, "status": "Paid",
                 "issueDate": "2024-05-01", "dueDate": "2024-05-31"}
            ],
            "expenses": [
                {"id": "e1", "category": "travel", "amount": -50, "date": "2024-05-03"}
            ]
        }"#;
        let snapshot: CompanySnapshot = serde_json::from_str(json).unwrap();

        let kpis = FinancialAggregator::compute_kpis(&snapshot.invoices, &snapshot.expenses);

        assert_eq!(kpis.total_expenses, Decimal::ZERO);
        assert_eq!(kpis.net_profit, dec!(100));
    }

    #[test]
    fn test_metrics_serialize() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let metrics =
            FinancialAggregator::build_dashboard(&snapshot(), now, &default_settings());
        let json = serde_json::to_value(&metrics).unwrap();

        assert_eq!(json["currency"], "XOF");
        assert_eq!(json["monthly_series"].as_array().unwrap().len(), 6);
        assert_eq!(json["kpis"]["net_profit"], "70");
    }
}
