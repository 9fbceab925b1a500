//! In-memory endpoint search.
//!
//! This module provides a deterministic, low-overhead search over the
//! catalog. Matching is a case-insensitive substring test against four
//! fields per endpoint; there is no ranking, no tokenization, and no
//! background indexing. Results come back in catalog traversal order.

use apihub_types::HttpMethod;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;

/// One search hit, denormalized so callers can render a result row without
/// touching the catalog again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub provider_id: String,
    pub provider_name: String,
    pub provider_logo: String,
    pub endpoint_id: String,
    pub title: String,
    pub path: String,
    pub method: HttpMethod,
}

/// Searches every endpoint in the catalog.
///
/// The query is trimmed first; a blank query yields no hits rather than all
/// of them. An endpoint matches when the lowercased query is a substring of
/// its title, its path, its method name, or its provider's display name.
pub fn search(catalog: &Catalog, query: &str) -> Vec<SearchHit> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();

    let hits: Vec<SearchHit> = catalog
        .search_rows()
        .iter()
        .filter(|row| {
            row.title.contains(&needle)
                || row.path.contains(&needle)
                || row.method.contains(&needle)
                || row.provider_name.contains(&needle)
        })
        .map(|row| {
            let (provider, endpoint) = catalog.resolve(row.target);
            SearchHit {
                provider_id: provider.id.clone(),
                provider_name: provider.name.clone(),
                provider_logo: provider.logo_url.clone(),
                endpoint_id: endpoint.id.clone(),
                title: endpoint.title.clone(),
                path: endpoint.path.clone(),
                method: endpoint.method,
            }
        })
        .collect();

    debug!(query = %trimmed, hits = hits.len(), "catalog search");
    hits
}
