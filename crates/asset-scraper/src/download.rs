//! Concurrent image downloader.
//!
//! Each matched filename/URL pair is resolved to a sanitized display name
//! and fetched by its own task, bounded by a semaphore so a large category
//! cannot exhaust connections or file handles. Entries that cannot be
//! resolved or that come back with a non-success status are skipped with a
//! warning and counted, never fatal.

use crate::api::WikiClient;
use crate::catalog::Catalog;
use crate::category::Category;
use crate::media::MediaIndex;
use crate::sanitize::sanitize_name;
use anyhow::Result;
use shared::DataPaths;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// Outcome counters for one category's download batch
#[derive(Debug, Clone, Default)]
pub struct DownloadStats {
    pub downloaded: usize,
    pub skipped_unresolved: usize,
    pub skipped_http: usize,
    pub failed: usize,
}

enum Outcome {
    Saved,
    SkippedStatus,
}

/// Resolve the display name for a listed filename
///
/// Tries the catalog directly, then the category's fallback key.
pub fn resolve_display_name<'a>(
    category: Category,
    catalog: &'a Catalog,
    file_name: &str,
) -> Option<&'a str> {
    if let Some(name) = catalog.get(file_name) {
        return Some(name);
    }

    category
        .catalog_key_fallback(file_name)
        .and_then(|key| catalog.get(&key))
        .map(String::as_str)
}

/// Download every matched image for a category
///
/// All entries are dispatched as concurrent tasks sharing one client pool,
/// bounded by `max_concurrent`, and awaited as a batch.
pub async fn download_all(
    client: &WikiClient,
    category: Category,
    catalog: &Catalog,
    media: MediaIndex,
    paths: &DataPaths,
    max_concurrent: usize,
) -> Result<DownloadStats> {
    let stats = Arc::new(tokio::sync::Mutex::new(DownloadStats::default()));
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));

    let mut tasks = Vec::new();

    for (file_name, url) in media {
        let Some(display_name) = resolve_display_name(category, catalog, &file_name) else {
            warn!(
                category = %category,
                file = %file_name,
                "No catalog entry for image, skipping"
            );
            stats.lock().await.skipped_unresolved += 1;
            continue;
        };

        let dest = destination_path(paths, category, display_name);
        let permit = semaphore.clone().acquire_owned().await?;
        let client = client.clone();
        let stats_clone = stats.clone();

        let task = tokio::spawn(async move {
            let result = download_one(&client, &file_name, &url, &dest).await;

            let mut stats_guard = stats_clone.lock().await;
            match result {
                Ok(Outcome::Saved) => stats_guard.downloaded += 1,
                Ok(Outcome::SkippedStatus) => stats_guard.skipped_http += 1,
                Err(e) => {
                    warn!(file = %file_name, error = %e, "Download failed");
                    stats_guard.failed += 1;
                }
            }

            drop(permit);
        });

        tasks.push(task);
    }

    // Wait for all tasks to complete
    for task in tasks {
        let _ = task.await;
    }

    let final_stats = stats.lock().await.clone();
    info!(
        category = %category,
        downloaded = final_stats.downloaded,
        skipped_unresolved = final_stats.skipped_unresolved,
        skipped_http = final_stats.skipped_http,
        failed = final_stats.failed,
        "Category downloads complete"
    );

    Ok(final_stats)
}

/// Destination path for a resolved display name
fn destination_path(paths: &DataPaths, category: Category, display_name: &str) -> PathBuf {
    let file_name = format!("{}.png", sanitize_name(display_name));
    paths.image_file(category.save_dir(), &file_name)
}

/// Fetch one image and write it to disk, overwriting any existing file
async fn download_one(
    client: &WikiClient,
    file_name: &str,
    url: &str,
    dest: &Path,
) -> Result<Outcome> {
    let response = client.fetch(url).await?;
    let status = response.status();

    if !status.is_success() {
        warn!(file = %file_name, status = %status, "Non-success response, skipping download");
        return Ok(Outcome::SkippedStatus);
    }

    let bytes = response.bytes().await?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest, &bytes)?;

    info!(file = %dest.display(), "Downloaded image");
    Ok(Outcome::Saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_direct_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert("200010_01.png".to_string(), "Midgardsormr".to_string());

        assert_eq!(
            resolve_display_name(Category::Dragon, &catalog, "200010_01.png"),
            Some("Midgardsormr")
        );
        assert_eq!(
            resolve_display_name(Category::Dragon, &catalog, "200011_01.png"),
            None
        );
    }

    #[test]
    fn test_wyrmprint_variants_share_one_entry() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "400001_02.png".to_string(),
            "Resounding Rendition".to_string(),
        );

        // The first variant has no direct entry and resolves via the fallback
        assert_eq!(
            resolve_display_name(Category::Wyrmprint, &catalog, "400001_01.png"),
            Some("Resounding Rendition")
        );
        assert_eq!(
            resolve_display_name(Category::Wyrmprint, &catalog, "400001_02.png"),
            Some("Resounding Rendition")
        );
    }

    #[test]
    fn test_no_fallback_outside_wyrmprint() {
        let mut catalog = Catalog::new();
        catalog.insert("200010_02.png".to_string(), "Midgardsormr".to_string());

        assert_eq!(
            resolve_display_name(Category::Dragon, &catalog, "200010_01.png"),
            None
        );
    }

    #[test]
    fn test_destination_path_is_sanitized() {
        let paths = shared::DataPaths::new("/data");
        let dest = destination_path(&paths, Category::Wyrmprint, "Lv & Order");
        assert_eq!(dest, PathBuf::from("/data/img/amulet/Lv_and_Order.png"));
    }
}
