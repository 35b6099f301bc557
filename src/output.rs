//! Output layer for the dexcli CLI.
//!
//! Centralizes stdout/stderr separation and human vs JSON output modes.
//! - stdout: data (the "answer" - results, JSON)
//! - stderr: diagnostics (progress, debug messages, human-mode errors)

use serde::Serialize;
use std::io::{self, Write};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Output helper that centralizes all CLI output
#[derive(Debug, Clone)]
pub struct Output {
    pub mode: OutputMode,
    pub quiet: bool,
    pub verbose: bool,
}

impl Output {
    pub fn new(json: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            mode: if json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
            quiet,
            verbose,
        }
    }

    /// Write data to stdout (the command's "answer")
    /// In JSON mode, this is the only thing that goes to stdout
    pub fn data(&self, message: &str) {
        println!("{}", message);
    }

    /// Write a diagnostic/progress message to stderr
    /// Suppressed in JSON mode and when --quiet is set
    pub fn info(&self, message: &str) {
        if self.mode == OutputMode::Json || self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    /// Write a verbose diagnostic message to stderr
    /// Only shown with --verbose in human mode
    pub fn verbose(&self, message: &str) {
        if self.mode == OutputMode::Json || self.quiet || !self.verbose {
            return;
        }
        eprintln!("{}", message);
    }

    /// Write a warning to stderr
    /// Shown in human mode unless --quiet, suppressed in JSON mode
    pub fn warn(&self, message: &str) {
        if self.mode == OutputMode::Json || self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    /// Check if we're in JSON mode
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Check if we're in quiet mode
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Flush stdout (useful before exiting)
    #[allow(dead_code)]
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

// =============================================================================
// JSON Response Types
// =============================================================================

/// Schema version for JSON outputs.
/// Follows semver: breaking=major, additive=minor, bugfix=patch.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Tool version from Cargo.toml.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schema IDs for command outputs.
pub mod schema {
    pub const POKEMON: &str = "dexcli.pokemon";
    pub const LOOKUP: &str = "dexcli.lookup";
    pub const SUGGEST: &str = "dexcli.suggest";
    pub const NAMES: &str = "dexcli.names";
    pub const CONTEXT: &str = "dexcli.context";
}

/// Versioned wrapper for command JSON output.
/// Includes schema metadata for stable automation and versioning.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub ok: bool,
    pub schema_id: &'static str,
    pub schema_version: &'static str,
    /// Tool version (dexcli version that generated this output)
    pub tool_version: &'static str,
    /// ISO 8601 timestamp when this output was generated
    pub generated_at: String,
    /// Command-specific data payload
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Create a new envelope with the given schema ID and data.
    pub fn new(schema_id: &'static str, data: T) -> Self {
        Self {
            ok: true,
            schema_id,
            schema_version: SCHEMA_VERSION,
            tool_version: TOOL_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }

    /// Print this envelope as JSON to stdout.
    pub fn print(&self) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string_pretty(self)?;
        println!("{}", json);
        Ok(())
    }
}

/// JSON error response using envelope structure (written to stdout with non-zero exit).
/// Matches the Envelope structure so consumers get a consistent format.
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub ok: bool,
    pub schema_id: &'static str,
    pub schema_version: &'static str,
    pub tool_version: &'static str,
    pub generated_at: String,
    pub severity: &'static str,
    pub errors: Vec<JsonErrorInfo>,
    /// Always null for error responses
    pub data: Option<()>,
}

#[derive(Debug, Serialize)]
pub struct JsonErrorInfo {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl JsonError {
    /// Generic error schema for command failures
    pub const SCHEMA_ID: &'static str = "dexcli.error";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            schema_id: Self::SCHEMA_ID,
            schema_version: SCHEMA_VERSION,
            tool_version: TOOL_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            severity: "error",
            errors: vec![JsonErrorInfo {
                code: "internal_error",
                message: message.into(),
                details: None,
            }],
            data: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            ok: false,
            schema_id: Self::SCHEMA_ID,
            schema_version: SCHEMA_VERSION,
            tool_version: TOOL_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            severity: "error",
            errors: vec![JsonErrorInfo {
                code: "internal_error",
                message: message.into(),
                details: Some(details.into()),
            }],
            data: None,
        }
    }

    /// Print this error as JSON to stdout
    /// Panics if serialization fails (should never happen for JsonError)
    pub fn print(&self) {
        let json =
            serde_json::to_string_pretty(self).expect("JsonError serialization should never fail");
        println!("{}", json);
    }
}

// =============================================================================
// Meta UX JSON Response Types (--help, --version, --help-llm)
// =============================================================================

/// JSON response for --help flag
#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub ok: bool,
    pub help: String,
}

impl HelpResponse {
    pub fn new(help_text: String) -> Self {
        Self {
            ok: true,
            help: help_text,
        }
    }

    pub fn print(&self) {
        let json = serde_json::to_string_pretty(self)
            .expect("HelpResponse serialization should never fail");
        println!("{}", json);
    }
}

/// JSON response for --version flag
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub ok: bool,
    pub version: String,
}

impl VersionResponse {
    pub fn new(version: String) -> Self {
        Self { ok: true, version }
    }

    pub fn print(&self) {
        let json = serde_json::to_string_pretty(self)
            .expect("VersionResponse serialization should never fail");
        println!("{}", json);
    }
}

/// JSON response for --help-llm flag
#[derive(Debug, Serialize)]
pub struct LlmHelpResponse {
    pub ok: bool,
    pub llm_help: String,
}

impl LlmHelpResponse {
    pub fn new(llm_help: String) -> Self {
        Self { ok: true, llm_help }
    }

    pub fn print(&self) {
        let json = serde_json::to_string_pretty(self)
            .expect("LlmHelpResponse serialization should never fail");
        println!("{}", json);
    }
}
