//! Typed IDs for type-safe record references.
//!
//! Record IDs are opaque document keys issued by the persistence layer.
//! Wrapping them prevents passing an `InvoiceId` where a `ClientId` is expected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a blank ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Record ID must not be blank")]
pub struct BlankIdError;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an ID from an existing document key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the document key.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = BlankIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(BlankIdError);
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

typed_id!(CompanyId, "Unique identifier for a company.");
typed_id!(ClientId, "Unique identifier for a client.");
typed_id!(InvoiceId, "Unique identifier for an invoice.");
typed_id!(ExpenseId, "Unique identifier for an expense.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_id_display_and_accessors() {
        let id = InvoiceId::new("inv_8f3a");
        assert_eq!(id.to_string(), "inv_8f3a");
        assert_eq!(id.as_str(), "inv_8f3a");
    }

    #[test]
    fn test_id_from_str_trims() {
        let id = ClientId::from_str("  abc  ").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_blank_id_rejected() {
        assert_eq!(CompanyId::from_str(""), Err(BlankIdError));
        assert_eq!(ExpenseId::from_str("   "), Err(BlankIdError));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ExpenseId::new("exp-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"exp-1\"");

        let back: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
