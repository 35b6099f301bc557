//! Name-list cache.
//!
//! The suggestion matcher compares a query against every known name, and the
//! catalog holds ~1300 of them. Fetching that list on every invocation is
//! wasteful for a CLI, so it is persisted as a small JSON file between runs.
//! A corrupt or unreadable cache is treated as absent, never as a failure.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::PokeApi;
use crate::config::Config;
use crate::output::Output;

/// File name inside the cache directory
pub const CACHE_FILE: &str = "names.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct NameCache {
    pub fetched_at: DateTime<Utc>,
    pub names: Vec<String>,
}

impl NameCache {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            fetched_at: Utc::now(),
            names,
        }
    }

    /// Load the cache; a missing, unreadable, or unparseable file is `None`.
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persist the cache, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create cache directory {}", parent.display()))?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("write cache file {}", path.display()))?;
        Ok(())
    }

    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.fetched_at
    }
}

/// Where the name cache lives: `[cache].directory` from config if set,
/// otherwise the platform cache dir (falling back to the working directory
/// when the platform has none).
pub fn cache_path(config: &Config) -> PathBuf {
    let dir = match config.cache_dir() {
        Some(d) => PathBuf::from(d),
        None => dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dexcli"),
    };
    dir.join(CACHE_FILE)
}

/// Get the candidate name list: from the cache unless `refresh` is set,
/// otherwise fetched from the catalog and stored. A store failure warns but
/// does not fail the command; the fetched list is still returned.
pub async fn resolve_names(
    api: &PokeApi,
    path: &Path,
    refresh: bool,
    output: &Output,
) -> Result<Vec<String>> {
    if !refresh {
        if let Some(cache) = NameCache::load(path) {
            output.verbose(&format!(
                "Using {} cached names from {}",
                cache.names.len(),
                path.display()
            ));
            return Ok(cache.names);
        }
    }

    output.info("Fetching the name list from the catalog...");
    let names = api.fetch_names().await?;
    let cache = NameCache::new(names);
    if let Err(e) = cache.save(path) {
        output.warn(&format!("Warning: could not store the name cache: {:#}", e));
    }
    Ok(cache.names)
}
