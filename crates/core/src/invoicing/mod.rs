//! Invoice lifecycle rules.
//!
//! Status changes are performed by the CRUD layer; this module decides which
//! ones are allowed.

pub mod error;
pub mod status;

pub use error::InvoiceError;
pub use status::{can_mark_as_paid, mark_as_paid, validate_status_transition};
