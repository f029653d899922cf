//! Quotamon - quota alerting for shared network filesystems
//!
//! This crate provides functionality for:
//! - Measuring a managed filesystem against a global size threshold
//! - Finding per-user directories over quota at a fixed depth
//! - Emailing operators and offending users (or rendering in dry-run)

pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod provider;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{QuotamonError, Result};
