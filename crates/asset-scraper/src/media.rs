//! Media lister: paginates the wiki's allimages listing for a category.
//!
//! The listing is scanned in lexical order from the category's start marker.
//! Filenames matching the category pattern are recorded with their download
//! URL; the scan halts as soon as a filename's first character reaches the
//! category's stop marker, even mid-page.

use crate::api::types::ImageInfo;
use crate::api::WikiClient;
use crate::category::Category;
use crate::error::ScrapeError;
use std::collections::HashMap;
use tracing::{debug, info};

/// Matched filename to download URL, built fresh per run
pub type MediaIndex = HashMap<String, String>;

/// List all matching uploaded images for a category
pub async fn list(client: &WikiClient, category: Category) -> Result<MediaIndex, ScrapeError> {
    let mut index = MediaIndex::new();
    let mut aifrom = category.start_marker().to_string();

    loop {
        let page = client.all_images_page(&aifrom).await?;

        if !scan_page(category, &page.query.allimages, &mut index) {
            break;
        }

        match page.cont.and_then(|token| token.aicontinue) {
            Some(token) => aifrom = token,
            None => break,
        }
    }

    info!(category = %category, matched = index.len(), "Media listing complete");
    Ok(index)
}

/// Scan one page of listing entries into the index
///
/// Returns false once the stop marker is reached; the remainder of the page
/// is abandoned.
fn scan_page(category: Category, images: &[ImageInfo], index: &mut MediaIndex) -> bool {
    for image in images {
        let Some(first) = image.name.chars().next() else {
            continue;
        };

        if first >= category.stop_marker() {
            debug!(category = %category, file = %image.name, "Reached stop marker");
            return false;
        }

        if category.pattern().is_match(&image.name) {
            index.insert(image.name.clone(), image.url.clone());
        }
    }

    true
}
