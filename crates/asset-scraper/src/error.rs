//! Error types for the scraping pipeline.
//!
//! A malformed API page is fatal to the category being processed; individual
//! download misses are not errors and only surface as warnings and counters.

use thiserror::Error;

/// Errors that abort a category's processing
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A cargo query page could not be parsed as expected
    #[error("unexpected cargo query response from {url}")]
    QueryPage {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A media listing page could not be parsed as expected
    #[error("unexpected media listing response")]
    MediaPage {
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level failure talking to the wiki
    #[error("request failed")]
    Http(#[from] reqwest::Error),
}
