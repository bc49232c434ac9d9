//! Report service.

use std::future::Future;

use bizdash_shared::types::Locale;
use tracing::{debug, info};

use super::error::ReportError;
use super::prompt::ReportPrompt;
use super::types::{FinancialReport, ReportRequest};
use crate::records::{Expense, Invoice};

/// Opaque text generation backend.
pub trait TextGenerator {
    /// Produces text for the given prompt.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ReportError>> + Send;
}

/// Report service for producing the narrative financial report.
pub struct ReportService;

impl ReportService {
    /// Generates the narrative report for a company's records.
    ///
    /// When both collections are empty the locale's no-data notice is
    /// returned and the generator is not called.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Serialization` if records cannot be serialized,
    /// or `ReportError::Generation` if the generator fails or returns blank text.
    pub async fn generate<G: TextGenerator>(
        generator: &G,
        invoices: &[Invoice],
        expenses: &[Expense],
        locale: Locale,
    ) -> Result<FinancialReport, ReportError> {
        let request = ReportRequest::from_records(invoices, expenses)?;
        if request.is_empty {
            info!("no records to analyze, skipping report generation");
            return Ok(FinancialReport {
                body: Self::no_data_notice(locale).to_string(),
                generated: false,
            });
        }

        let prompt = ReportPrompt::render(&request, locale);
        debug!(
            invoice_count = invoices.len(),
            expense_count = expenses.len(),
            prompt_len = prompt.len(),
            "requesting financial report"
        );

        let body = generator.generate(&prompt).await?;
        if body.trim().is_empty() {
            return Err(ReportError::Generation("generator returned empty text".to_string()));
        }

        Ok(FinancialReport {
            body,
            generated: true,
        })
    }

    /// Notice shown when there are no records to analyze.
    #[must_use]
    pub const fn no_data_notice(locale: Locale) -> &'static str {
        match locale {
            Locale::Fr => {
                "Aucune donnée de facture ou de dépense n'a été trouvée. \
                 Veuillez d'abord ajouter des données pour générer un rapport."
            }
            Locale::En => {
                "No invoice or expense data was found. \
                 Add some records before generating a report."
            }
        }
    }
}
