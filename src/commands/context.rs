//! Context command: show the effective configuration, cache state, and
//! whether the catalog is reachable. Useful for understanding what dexcli
//! will actually do before running a lookup.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use crate::api::PokeApi;
use crate::cache::NameCache;
use crate::exit_codes;
use crate::output::{schema, Envelope, Output};

/// Effective configuration after flags, environment, and file are merged.
#[derive(Debug, Serialize)]
pub struct ConfigInfo {
    /// Config file in effect, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    /// Base URL requests go to
    pub api_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

/// State of the on-disk name cache.
#[derive(Debug, Serialize)]
pub struct CacheInfo {
    pub path: String,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_hours: Option<i64>,
}

/// Result of probing the catalog endpoint.
#[derive(Debug, Serialize)]
pub struct CatalogInfo {
    pub reachable: bool,
    /// Total entries the catalog reports, when reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_entries: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContextReport {
    configuration: ConfigInfo,
    cache: CacheInfo,
    catalog: CatalogInfo,
}

pub async fn context(
    api: &PokeApi,
    timeout: Duration,
    config_file: Option<&Path>,
    cache_file: &Path,
    output: &Output,
) -> Result<i32> {
    let configuration = ConfigInfo {
        config_file: config_file.map(|p| p.display().to_string()),
        api_url: api.base().as_str().trim_end_matches('/').to_string(),
        timeout_ms: timeout.as_millis() as u64,
    };

    let cache = inspect_cache(cache_file);

    // A probe failure is a finding here, not a command failure.
    let catalog = match api.probe().await {
        Ok(count) => CatalogInfo {
            reachable: true,
            total_entries: Some(count),
            error: None,
        },
        Err(e) => CatalogInfo {
            reachable: false,
            total_entries: None,
            error: Some(format!("{e:#}")),
        },
    };

    let report = ContextReport {
        configuration,
        cache,
        catalog,
    };

    if output.is_json() {
        Envelope::new(schema::CONTEXT, &report).print()?;
    } else {
        print_human(&report);
    }
    Ok(exit_codes::FOUND)
}

fn inspect_cache(cache_file: &Path) -> CacheInfo {
    match NameCache::load(cache_file) {
        Some(cache) => CacheInfo {
            path: cache_file.display().to_string(),
            present: true,
            names: Some(cache.names.len()),
            fetched_at: Some(cache.fetched_at),
            age_hours: Some(cache.age().num_hours()),
        },
        None => CacheInfo {
            path: cache_file.display().to_string(),
            present: false,
            names: None,
            fetched_at: None,
            age_hours: None,
        },
    }
}

fn print_human(report: &ContextReport) {
    println!("CONFIGURATION:");
    println!(
        "  Config file: {}",
        report.configuration.config_file.as_deref().unwrap_or("none")
    );
    println!("  API url:     {}", report.configuration.api_url);
    println!("  Timeout:     {} ms", report.configuration.timeout_ms);

    println!();
    println!("CACHE:");
    println!("  Path:    {}", report.cache.path);
    println!(
        "  Present: {}",
        if report.cache.present { "✓" } else { "✗" }
    );
    if let Some(names) = report.cache.names {
        println!("  Names:   {}", names);
    }
    if let Some(ref age) = cache_age(report) {
        println!("  Age:     {}", age);
    }

    println!();
    println!("CATALOG:");
    println!(
        "  Reachable: {}",
        if report.catalog.reachable { "✓" } else { "✗" }
    );
    if let Some(total) = report.catalog.total_entries {
        println!("  Entries:   {}", total);
    }
    if let Some(ref error) = report.catalog.error {
        println!("  Error:     {}", error);
    }
}

fn cache_age(report: &ContextReport) -> Option<String> {
    let fetched_at = report.cache.fetched_at?;
    Some(format_age(Utc::now() - fetched_at))
}

fn format_age(age: chrono::Duration) -> String {
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_minutes() < 60 {
        format!("{}m", age.num_minutes())
    } else if age.num_hours() < 48 {
        format!("{}h", age.num_hours())
    } else {
        format!("{}d", age.num_days())
    }
}
