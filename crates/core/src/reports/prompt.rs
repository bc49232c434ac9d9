//! Analyst prompt assembly.

use bizdash_shared::types::Locale;

use super::types::ReportRequest;

/// Section titles of the generated report.
struct SectionTitles {
    report: &'static str,
    summary: &'static str,
    revenue: &'static str,
    expenses: &'static str,
    recommendations: &'static str,
}

impl SectionTitles {
    const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Fr => Self {
                report: "Rapport Financier",
                summary: "Résumé",
                revenue: "Analyse des Revenus",
                expenses: "Analyse des Dépenses",
                recommendations: "Recommandations",
            },
            Locale::En => Self {
                report: "Financial Report",
                summary: "Summary",
                revenue: "Revenue Analysis",
                expenses: "Expense Analysis",
                recommendations: "Recommendations",
            },
        }
    }
}

/// Builds the instruction text sent to the text generator.
pub struct ReportPrompt;

impl ReportPrompt {
    /// Renders the analyst prompt for the given records and locale.
    #[must_use]
    pub fn render(request: &ReportRequest, locale: Locale) -> String {
        let SectionTitles {
            report,
            summary,
            revenue,
            expenses,
            recommendations,
        } = SectionTitles::for_locale(locale);
        let language = match locale {
            Locale::Fr => "French",
            Locale::En => "English",
        };
        let ReportRequest {
            invoices: invoice_json,
            expenses: expense_json,
            ..
        } = request;

        format!(
            "You are an expert financial analyst. Generate a financial report based on the \
             provided invoices and expenses.\n\n\
             Invoices: {invoice_json}\n\
             Expenses: {expense_json}\n\n\
             Analyze the data and provide a comprehensive report in {language}, formatted as \
             an HTML string. The report must include:\n\
             - A main title (<h2>{report}</h2>).\n\
             - Sections for \"{summary}\", \"{revenue}\", \"{expenses}\" and \
             \"{recommendations}\" using <h3> for subtitles.\n\
             - Key metrics (Total Income, Total Expenses, Net Profit/Loss) presented clearly, \
             in a list (<ul>) or with bold tags (<strong>).\n\
             - Key observations, trends, and actionable recommendations for improving \
             profitability and reducing expenses, presented as bullet points in unordered \
             lists (<ul><li>...</li></ul>).\n\n\
             Ensure the entire output is a single, valid HTML string, ready to be rendered in \
             a div. Do not include markdown or backticks.\n"
        )
    }
}
