//! Expense records.

use bizdash_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;
use super::date::RecordDate;

/// Business expense category.
///
/// The set is open-ended in storage; unknown labels decode as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Advertising and promotion.
    #[serde(alias = "Marketing")]
    Marketing,
    /// Software subscriptions and licenses.
    #[serde(alias = "Logiciels")]
    Software,
    /// Office supplies.
    #[serde(alias = "Fournitures de bureau")]
    OfficeSupplies,
    /// Travel.
    #[serde(alias = "Déplacement")]
    Travel,
    /// Anything else.
    #[default]
    #[serde(alias = "Autre", other)]
    Other,
}

impl ExpenseCategory {
    /// Returns the canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Software => "software",
            Self::OfficeSupplies => "office_supplies",
            Self::Travel => "travel",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded business expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Free-text description.
    #[serde(default, alias = "name")]
    pub description: String,
    /// Category.
    #[serde(default)]
    pub category: ExpenseCategory,
    /// Amount spent.
    #[serde(default, deserialize_with = "amount::lenient")]
    pub amount: Decimal,
    /// Date the expense was incurred.
    #[serde(default)]
    pub date: RecordDate,
    /// Link to the uploaded receipt, if any.
    #[serde(default)]
    pub receipt_url: Option<String>,
}
