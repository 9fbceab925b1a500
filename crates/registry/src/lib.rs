//! Registry crate for the apihub provider catalog.
//!
//! This crate provides the core data structures and functionality for
//! loading, validating, and searching the immutable catalog of API
//! providers that the reference browser renders.

pub mod catalog;
pub mod config;
pub mod search;

pub use apihub_types::{Category, Endpoint, EndpointGroup, EnvKind, HttpMethod, Provider};
pub use catalog::{Catalog, CatalogError, CatalogManifest};
pub use config::{default_catalog_path, load_catalog, load_catalog_from_path, CATALOG_PATH_ENV};
pub use search::{search, SearchHit};
