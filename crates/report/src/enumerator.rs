//! Category discovery.
//!
//! Responsibilities:
//! - Read the collection relations of the live session's API root.
//! - Resolve them through the manifest, append custom categories and apply the denylist.
//!
//! Does NOT handle:
//! - Fetching category contents (see `collector.rs`).
//!
//! Invariants:
//! - The result is ordered as the engine lists its relations, custom categories last.
//! - A category name appears at most once.

use std::collections::HashSet;

use tracing::debug;
use zvirt_client::EngineClient;

use crate::error::{ReportError, Result};
use crate::manifest::{self, CUSTOM_CATEGORIES, Category, DENYLIST};

/// Strip one leading underscore from a discovered name.
pub fn normalize_category_name(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}

/// Select the categories to collect from discovered names.
///
/// Names are normalized, `custom` names are appended, denied names are
/// removed and duplicates dropped keeping the first occurrence.
pub fn select_categories<'a, I>(discovered: I, custom: &[&'a str], denylist: &[&str]) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    discovered
        .into_iter()
        .chain(custom.iter().copied())
        .map(normalize_category_name)
        .filter(|name| !denylist.contains(name))
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Discover the categories to collect for this session.
pub async fn list_categories(client: &EngineClient) -> Result<Vec<&'static Category>> {
    let root = client.api_root().await.map_err(ReportError::Discovery)?;

    if let Some(version) = root.product_version() {
        debug!(version, manifest = manifest::MANIFEST_VERSION, "Engine version");
    }

    let discovered = root.collection_relations().into_iter().filter_map(|rel| {
        let category = manifest::by_rel(rel);
        if category.is_none() {
            debug!(rel, "No manifest entry for relation, skipping");
        }
        category.map(|c| c.name)
    });

    let categories = select_categories(discovered, CUSTOM_CATEGORIES, DENYLIST)
        .into_iter()
        .filter_map(manifest::by_name)
        .collect();

    Ok(categories)
}
