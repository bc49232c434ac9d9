//! Company, client, and snapshot records.

use bizdash_shared::types::{ClientId, CompanyId};
use serde::{Deserialize, Deserializer, Serialize};

use super::date::RecordDate;
use super::expense::Expense;
use super::invoice::Invoice;

/// The company that owns every other record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company ID.
    pub id: CompanyId,
    /// Display name.
    pub name: String,
    /// Date the company profile was created.
    #[serde(default)]
    pub creation_date: Option<RecordDate>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Tax identifier.
    #[serde(default)]
    pub tax_id: Option<String>,
}

/// A client the company invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

/// One company's records read at a single point in time.
///
/// Missing or `null` collections decode as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    /// Owning company.
    pub company: Company,
    /// Clients.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub clients: Vec<Client>,
    /// Invoices.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub invoices: Vec<Invoice>,
    /// Expenses.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expenses: Vec<Expense>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
