//! Shared library for the wiki asset scraper.
//!
//! This crate provides common functionality used by the scraper binary:
//! - Configuration management
//! - File path utilities
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod paths;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use paths::DataPaths;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
