//! Narrative financial report generation.
//!
//! This module prepares the inputs of the narrative report and hands them to
//! an opaque text generator:
//! - Record serialization into the prompt payload
//! - Localized analyst prompt
//! - Short-circuit when there is nothing to analyze

pub mod error;
pub mod prompt;
pub mod service;
pub mod types;

pub use error::ReportError;
pub use prompt::ReportPrompt;
pub use service::{ReportService, TextGenerator};
pub use types::{FinancialReport, ReportRequest};
