use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use tracing::{debug, warn};

use crate::catalog::Catalog;

/// Environment variable that points at an alternate catalog document.
pub const CATALOG_PATH_ENV: &str = "APIHUB_CATALOG_PATH";

/// Path override from the environment, if one is set and non-empty.
pub fn catalog_path_override() -> Option<PathBuf> {
    match env::var(CATALOG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Default location for a user-supplied catalog document.
pub fn default_catalog_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("apihub")
        .join("catalog.json")
}

/// Loads the catalog, preferring the environment override, then the user
/// config directory, then the embedded document.
///
/// A path that does not exist is skipped with a warning; a path that exists
/// but fails to parse or validate is a hard error, so a broken user catalog
/// never masquerades as the shipped one.
pub fn load_catalog() -> Result<Catalog> {
    if let Some(path) = catalog_path_override() {
        if path.is_file() {
            return load_catalog_from_path(&path);
        }
        warn!(path = %path.display(), "catalog override not found, trying next source");
    }

    let user_path = default_catalog_path();
    if user_path.is_file() {
        return load_catalog_from_path(&user_path);
    }

    debug!("using embedded catalog");
    Catalog::builtin().context("embedded catalog failed validation")
}

/// Loads and validates a catalog document from an explicit path.
pub fn load_catalog_from_path(path: &std::path::Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read catalog from {}", path.display()))?;
    let catalog = Catalog::from_json(&text)
        .with_context(|| format!("parse catalog from {}", path.display()))?;
    debug!(path = %path.display(), providers = catalog.providers().len(), "catalog loaded");
    Ok(catalog)
}
