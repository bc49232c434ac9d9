//! Shared types, errors, and configuration for Bizdash.
//!
//! This crate provides common types used across all other crates:
//! - Typed record IDs as issued by the persistence layer
//! - Money and currency types with decimal precision
//! - Display locale (month labels, number separators)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
