//! Asset scraper library for fetching game art from the wiki.
//!
//! This library queries the wiki's cargo tables for canonical entity names,
//! enumerates uploaded image files, and downloads the matches renamed to
//! filesystem-safe display names.

pub mod api;
pub mod catalog;
pub mod category;
pub mod download;
pub mod error;
pub mod media;
pub mod sanitize;

pub use api::WikiClient;
pub use catalog::Catalog;
pub use category::Category;
pub use download::DownloadStats;
pub use error::ScrapeError;
pub use media::MediaIndex;
