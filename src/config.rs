use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Built-in defaults, used when neither flags, env, nor config override them.
pub mod defaults {
    use std::time::Duration;

    /// Public PokéAPI instance
    pub const API_URL: &str = "https://pokeapi.co/api/v2";

    /// Per-request timeout: fail fast on unreachable hosts
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Error from the configuration phase. Typed so the exit-code classifier
/// can tell configuration problems apart from runtime failures.
#[derive(Debug)]
pub struct ConfigError(String);

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Main configuration structure loaded from dexcli.toml
#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub api: Option<ApiConfig>,
    pub cache: Option<CacheConfig>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ApiConfig {
    /// Base URL of the catalog API (no trailing slash needed)
    pub base_url: Option<String>,
    /// Request timeout as a duration string ("10s", "500ms", "1m")
    pub timeout: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CacheConfig {
    /// Directory holding the name cache. Defaults to the platform cache dir.
    pub directory: Option<String>,
}

impl Config {
    /// Load config from file, or return default if no config exists.
    /// If an explicit path is provided via --config, it MUST exist (error if not).
    /// If no path is provided, check ./dexcli.toml (use default if not found).
    pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let config_path = match path {
            Some(p) => {
                // User explicitly specified a path - it MUST exist
                if !p.exists() {
                    return Err(
                        ConfigError::new(format!("Config file not found: {}", p.display())).into(),
                    );
                }
                p
            }
            None => {
                // No path specified - check default location
                let default_path = Path::new("dexcli.toml");
                if default_path.exists() {
                    default_path
                } else {
                    return Ok(Config::default());
                }
            }
        };

        let contents = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", config_path.display(), e)))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse {}: {}", config_path.display(), e)))?;

        config.validate_paths()?;

        Ok(config)
    }

    /// Validate that configured paths are safe (no path traversal).
    /// Absolute cache directories are fine (the cache is user-scoped, not
    /// project-scoped), but '..' components are rejected.
    fn validate_paths(&self) -> Result<(), anyhow::Error> {
        if let Some(ref cache) = self.cache {
            if let Some(ref p) = cache.directory {
                Self::validate_path(p, "cache.directory")?;
            }
        }
        Ok(())
    }

    fn validate_path(path: &str, field: &str) -> Result<(), anyhow::Error> {
        if path.split(['/', '\\']).any(|c| c == "..") {
            return Err(ConfigError::new(format!(
                "Invalid {} path '{}': paths cannot contain '..'",
                field, path
            ))
            .into());
        }
        Ok(())
    }

    /// Get the API base URL with resolution order: CLI > env > config > default
    pub fn resolve_api_url(&self, cli_url: Option<&str>) -> String {
        // CLI takes precedence
        if let Some(url) = cli_url {
            return url.trim_end_matches('/').to_string();
        }

        // Then environment variable
        if let Ok(url) = std::env::var("DEXCLI_API_URL") {
            if !url.is_empty() {
                return url.trim_end_matches('/').to_string();
            }
        }

        // Then config file
        if let Some(ref api) = self.api {
            if let Some(ref url) = api.base_url {
                return url.trim_end_matches('/').to_string();
            }
        }

        // Finally the built-in default
        defaults::API_URL.to_string()
    }

    /// Get the request timeout with resolution order: CLI > config > default
    pub fn resolve_timeout(&self, cli_timeout: Option<&str>) -> Result<Duration> {
        if let Some(s) = cli_timeout {
            return parse_duration(s)
                .map_err(|e| ConfigError::new(format!("Invalid --timeout value: {e:#}")).into());
        }

        if let Some(ref api) = self.api {
            if let Some(ref s) = api.timeout {
                return parse_duration(s).map_err(|e| {
                    ConfigError::new(format!("Invalid [api].timeout in config: {e:#}")).into()
                });
            }
        }

        Ok(defaults::REQUEST_TIMEOUT)
    }

    /// Get the configured cache directory, if any
    pub fn cache_dir(&self) -> Option<&str> {
        self.cache.as_ref().and_then(|c| c.directory.as_deref())
    }
}

/// Parse a duration string like "5s", "500ms", "1m".
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    // Try to find the unit suffix
    let (num_part, unit) = if let Some(stripped) = s.strip_suffix("ms") {
        (stripped, "ms")
    } else if let Some(stripped) = s.strip_suffix('s') {
        (stripped, "s")
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, "m")
    } else {
        // Default to seconds if no unit
        (s, "s")
    };

    let num: u64 = num_part
        .trim()
        .parse()
        .with_context(|| format!("Invalid duration number: '{}'", num_part))?;

    let duration = match unit {
        "ms" => Duration::from_millis(num),
        "s" => Duration::from_secs(num),
        "m" => Duration::from_secs(num * 60),
        _ => anyhow::bail!("Unknown duration unit: '{}'", unit),
    };

    Ok(duration)
}
