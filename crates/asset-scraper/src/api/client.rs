//! MediaWiki API client.

use crate::api::types::{AllImagesResponse, CargoQueryResponse};
use crate::error::ScrapeError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the wiki's api.php endpoint
///
/// Clones share the underlying connection pool, so one client is built per
/// run and handed to every download task.
#[derive(Debug, Clone)]
pub struct WikiClient {
    /// HTTP client
    client: Client,
    /// Full URL of the api.php endpoint
    base_url: String,
    /// Page size for cargo queries
    page_size: usize,
}

impl WikiClient {
    /// Create a new wiki client
    pub fn new(
        base_url: String,
        user_agent: &str,
        timeout: Duration,
        page_size: usize,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            page_size,
        })
    }

    /// Fetch the complete result set of a cargo query
    ///
    /// Pages through the API in `page_size` chunks, stopping on an empty
    /// page or a short page following a full one. The API is trusted to
    /// return non-overlapping pages in a stable order; no deduplication is
    /// performed. A page that cannot be parsed fails the whole query with
    /// the page URL attached.
    pub async fn cargo_query<T: DeserializeOwned>(
        &self,
        tables: &str,
        fields: &str,
        where_clause: Option<&str>,
    ) -> Result<Vec<T>, ScrapeError> {
        let mut rows = Vec::new();
        let mut offset = 0usize;

        loop {
            let limit = self.page_size.to_string();
            let offset_param = offset.to_string();
            let mut params = vec![
                ("action", "cargoquery"),
                ("format", "json"),
                ("limit", limit.as_str()),
                ("offset", offset_param.as_str()),
                ("tables", tables),
                ("fields", fields),
            ];
            if let Some(clause) = where_clause {
                params.push(("where", clause));
            }

            let request = self.client.get(&self.base_url).query(&params).build()?;
            let url = request.url().to_string();
            debug!(url = %url, offset, "Fetching cargo query page");

            let body = self.client.execute(request).await?.text().await?;
            let page: CargoQueryResponse<T> = serde_json::from_str(&body)
                .map_err(|source| ScrapeError::QueryPage { url, source })?;

            let fetched = page.cargoquery.len();
            if fetched == 0 {
                break;
            }

            rows.extend(page.cargoquery.into_iter().map(|item| item.title));
            offset += fetched;

            if fetched < self.page_size {
                break;
            }
        }

        debug!(tables, rows = rows.len(), "Cargo query complete");
        Ok(rows)
    }

    /// Fetch one page of the allimages media listing, starting at `aifrom`
    pub async fn all_images_page(&self, aifrom: &str) -> Result<AllImagesResponse, ScrapeError> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "allimages"),
            ("aifrom", aifrom),
            ("ailimit", "max"),
        ];

        debug!(aifrom, "Fetching media listing page");
        let body = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|source| ScrapeError::MediaPage { source })
    }

    /// Issue a plain GET, used for image downloads
    pub async fn fetch(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client.get(url).send().await
    }
}
