//! Catalog container, embedded default document, and load-time validation.
//!
//! A [`Catalog`] is an immutable snapshot of every provider the reference
//! browser knows about. It is constructed once, validated eagerly, and then
//! only ever read. Everything downstream (search, example rendering, UI
//! state) receives the catalog as an explicit argument rather than reaching
//! for a global.

use apihub_types::{Category, Endpoint, EnvKind, Provider};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Default catalog document compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../../catalog/apihub-catalog.json");

/// On-disk shape of a catalog document.
///
/// This is the serde boundary; it carries no derived state and performs no
/// validation of its own. Turn it into a [`Catalog`] before using it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

/// Errors surfaced while parsing or validating a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate provider id '{0}'")]
    DuplicateProvider(String),
    #[error("duplicate endpoint id '{0}'")]
    DuplicateEndpoint(String),
    #[error("endpoint '{0}' has an empty path")]
    EmptyPath(String),
    #[error("provider '{provider}' {env} base URL '{url}' is invalid: {reason}")]
    InvalidBaseUrl {
        provider: String,
        env: EnvKind,
        url: String,
        reason: String,
    },
    #[error("provider '{provider}' references unknown category '{category}'")]
    UnknownCategory { provider: String, category: String },
}

/// Position of one endpoint within the catalog's provider/group/endpoint
/// nesting. Indices stay valid for the catalog's lifetime because the
/// catalog never mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EndpointRef {
    pub provider: usize,
    pub group: usize,
    pub endpoint: usize,
}

/// Pre-lowered searchable fields for one endpoint, flattened in catalog
/// traversal order. Built lazily on first use and cached for the catalog
/// lifetime so repeated queries skip the per-field lowercasing.
#[derive(Debug, Clone)]
pub(crate) struct SearchRow {
    pub target: EndpointRef,
    pub title: String,
    pub path: String,
    pub method: String,
    pub provider_name: String,
}

/// Validated, immutable catalog of providers and their endpoints.
#[derive(Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    providers: Vec<Provider>,
    endpoint_index: IndexMap<String, EndpointRef>,
    search_rows: OnceCell<Vec<SearchRow>>,
}

impl Catalog {
    /// Builds the catalog that ships with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parses a JSON catalog document and validates it.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = serde_json::from_str(text)?;
        Self::from_manifest(manifest)
    }

    /// Validates a manifest and builds the runtime container.
    ///
    /// Rejects duplicate provider or endpoint ids, empty endpoint paths,
    /// base URLs that would not survive path concatenation, and providers
    /// that reference a category the document never declares.
    pub fn from_manifest(manifest: CatalogManifest) -> Result<Self, CatalogError> {
        let CatalogManifest { categories, providers } = manifest;

        let mut endpoint_index: IndexMap<String, EndpointRef> = IndexMap::new();
        let mut provider_ids: Vec<&str> = Vec::with_capacity(providers.len());

        for (provider_idx, provider) in providers.iter().enumerate() {
            if provider_ids.contains(&provider.id.as_str()) {
                return Err(CatalogError::DuplicateProvider(provider.id.clone()));
            }
            provider_ids.push(&provider.id);

            if !categories.iter().any(|c| c.id == provider.category) {
                return Err(CatalogError::UnknownCategory {
                    provider: provider.id.clone(),
                    category: provider.category.clone(),
                });
            }

            check_base_url(provider, EnvKind::Production, &provider.production.base_url)?;
            if let Some(sandbox) = provider.sandbox.as_ref() {
                check_base_url(provider, EnvKind::Sandbox, &sandbox.base_url)?;
            }

            for (group_idx, group) in provider.groups.iter().enumerate() {
                for (endpoint_idx, endpoint) in group.endpoints.iter().enumerate() {
                    if endpoint.path.trim().is_empty() {
                        return Err(CatalogError::EmptyPath(endpoint.id.clone()));
                    }
                    let target = EndpointRef {
                        provider: provider_idx,
                        group: group_idx,
                        endpoint: endpoint_idx,
                    };
                    if endpoint_index.insert(endpoint.id.clone(), target).is_some() {
                        return Err(CatalogError::DuplicateEndpoint(endpoint.id.clone()));
                    }
                }
            }
        }

        debug!(
            providers = providers.len(),
            endpoints = endpoint_index.len(),
            "catalog validated"
        );

        Ok(Self {
            categories,
            providers,
            endpoint_index,
            search_rows: OnceCell::new(),
        })
    }

    /// Declared categories, in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All providers, in document order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Looks up a provider by id.
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Providers belonging to one category, in document order.
    pub fn providers_in_category<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Provider> {
        self.providers.iter().filter(move |p| p.category == category_id)
    }

    /// Looks up an endpoint by id, together with its owning provider.
    pub fn endpoint(&self, id: &str) -> Option<(&Provider, &Endpoint)> {
        self.endpoint_index.get(id).map(|target| self.resolve(*target))
    }

    /// Total number of endpoints across all providers and groups.
    pub fn endpoint_count(&self) -> usize {
        self.endpoint_index.len()
    }

    pub(crate) fn resolve(&self, target: EndpointRef) -> (&Provider, &Endpoint) {
        let provider = &self.providers[target.provider];
        let endpoint = &provider.groups[target.group].endpoints[target.endpoint];
        (provider, endpoint)
    }

    /// Flattened search rows in traversal order: providers in document
    /// order, groups in declaration order, endpoints in declaration order.
    pub(crate) fn search_rows(&self) -> &[SearchRow] {
        self.search_rows.get_or_init(|| {
            let mut rows = Vec::with_capacity(self.endpoint_index.len());
            for target in self.endpoint_index.values() {
                let (provider, endpoint) = self.resolve(*target);
                rows.push(SearchRow {
                    target: *target,
                    title: endpoint.title.to_lowercase(),
                    path: endpoint.path.to_lowercase(),
                    method: endpoint.method.as_str().to_lowercase(),
                    provider_name: provider.name.to_lowercase(),
                });
            }
            rows
        })
    }
}

fn check_base_url(provider: &Provider, env: EnvKind, raw: &str) -> Result<(), CatalogError> {
    validate_base_url(raw).map_err(|reason| CatalogError::InvalidBaseUrl {
        provider: provider.id.clone(),
        env,
        url: raw.to_string(),
        reason,
    })
}

/// Checks that a base URL parses, has a host, uses https for non-local
/// hosts, and carries no trailing slash. Endpoint paths are appended
/// verbatim, so a trailing slash here would produce `//` in every URL.
fn validate_base_url(raw: &str) -> Result<(), String> {
    let parsed = Url::parse(raw).map_err(|e| e.to_string())?;
    let host = parsed
        .host_str()
        .ok_or_else(|| "missing host".to_string())?;
    let local = host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1";
    if !local && parsed.scheme() != "https" {
        return Err(format!("scheme '{}' requires https", parsed.scheme()));
    }
    if raw.ends_with('/') {
        return Err("trailing slash".to_string());
    }
    Ok(())
}
