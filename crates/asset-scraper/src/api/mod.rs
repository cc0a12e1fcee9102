//! MediaWiki API client implementation.
//!
//! This module provides the cargo query client and the media listing page
//! fetch used by the scraping pipeline.

pub mod client;
pub mod types;

pub use client::WikiClient;
pub use types::*;
