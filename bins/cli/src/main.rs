//! Bizdash CLI
//!
//! Computes the dashboard of a company snapshot.
//!
//! Usage: `bizdash <snapshot.json> [YYYY-MM-DD]`

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bizdash_core::dashboard::{DashboardSettings, FinancialAggregator};
use bizdash_core::listing::{InvoiceSortKey, SortConfig, SortDirection, sorted_invoices};
use bizdash_core::records::{CompanySnapshot, InvoiceStatus};
use bizdash_shared::AppConfig;
use bizdash_shared::types::Money;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bizdash=info,bizdash_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(code = err.error_code(), %err, "Failed to load configuration");
            return Err(err.into());
        }
    };
    let (path, now) = parse_args(std::env::args().skip(1))?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: CompanySnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;

    let settings = DashboardSettings::from(&config);
    let metrics = FinancialAggregator::build_dashboard(&snapshot, now, &settings);

    println!("{}", serde_json::to_string_pretty(&metrics)?);

    let money = |amount| Money::new(amount, settings.currency).display(settings.locale);
    info!(
        company = %metrics.company_name,
        revenue = %money(metrics.kpis.total_revenue),
        expenses = %money(metrics.kpis.total_expenses),
        net_profit = %money(metrics.kpis.net_profit),
        "Dashboard computed"
    );

    let by_due_date = SortConfig::new(InvoiceSortKey::DueDate, SortDirection::Ascending);
    for invoice in sorted_invoices(&snapshot.invoices, by_due_date, now)
        .into_iter()
        .filter(|invoice| invoice.effective_status(now) == InvoiceStatus::Overdue)
    {
        warn!(
            invoice = %invoice.invoice_number,
            client = %invoice.client_name,
            due_date = %invoice.due_date,
            amount = %money(invoice.amount),
            "Invoice overdue"
        );
    }

    Ok(())
}

/// Reads the snapshot path and the optional reference date.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<(PathBuf, DateTime<Utc>)> {
    let Some(path) = args.next() else {
        bail!("usage: bizdash <snapshot.json> [YYYY-MM-DD]");
    };

    let now = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid reference date {raw}, expected YYYY-MM-DD"))?
            .and_time(NaiveTime::MIN)
            .and_utc(),
        None => Utc::now(),
    };

    Ok((PathBuf::from(path), now))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_args_with_reference_date() {
        let (path, now) = parse_args(args(&["snapshot.json", "2024-06-15"])).unwrap();
        assert_eq!(path, PathBuf::from("snapshot.json"));
        assert_eq!(now.to_rfc3339(), "2024-06-15T00:00:00+00:00");
    }

    #[test]
    fn test_parse_args_requires_path() {
        assert!(parse_args(args(&[])).is_err());
    }

    #[test]
    fn test_parse_args_rejects_bad_date() {
        assert!(parse_args(args(&["snapshot.json", "15/06/2024"])).is_err());
    }
}
