//! Core business logic for Bizdash.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All record types, status rules, and aggregations live here.
//!
//! # Modules
//!
//! - `records` - Company, client, invoice and expense records with lenient decoding
//! - `invoicing` - Invoice status transitions
//! - `dashboard` - KPI, monthly series and breakdown aggregation
//! - `listing` - Sorted list views with toggleable sort keys
//! - `reports` - Narrative report prompt and generator seam

pub mod dashboard;
pub mod invoicing;
pub mod listing;
pub mod records;
pub mod reports;
