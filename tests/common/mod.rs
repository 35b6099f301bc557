//! Common test infrastructure for dexcli integration tests.
//!
//! Provides:
//! - TestProject: temp directory with dexcli config and a seedable name cache
//! - Output assertion helpers
//! - A reachability probe for tests that need the live catalog

use std::path::PathBuf;
use std::process::{Command, Output};

/// A temp directory the binary runs inside, with its own config and cache
/// so tests never touch the user's real cache.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = r#"[cache]
directory = "cache"
"#;
        std::fs::write(dir.path().join("dexcli.toml"), config)
            .expect("Failed to write dexcli.toml");
        Self { dir }
    }

    /// Seed the name cache so suggest/names tests run without the network.
    #[allow(dead_code)]
    pub fn seed_names(&self, names: &[&str]) {
        let cache_dir = self.dir.path().join("cache");
        std::fs::create_dir_all(&cache_dir).expect("Failed to create cache dir");
        let payload = serde_json::json!({
            "fetched_at": "2026-08-20T12:00:00Z",
            "names": names,
        });
        std::fs::write(
            cache_dir.join("names.json"),
            serde_json::to_string_pretty(&payload).unwrap(),
        )
        .expect("Failed to write names.json");
    }

    /// Run dexcli with an isolated environment.
    pub fn run_dexcli(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dexcli"))
            .args(args)
            .current_dir(self.dir.path())
            // Isolate environment
            .env_clear()
            .env("HOME", self.dir.path())
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .output()
            .expect("Failed to execute dexcli")
    }

    /// Run dexcli and assert success
    #[allow(dead_code)]
    pub fn run_dexcli_ok(&self, args: &[&str]) -> Output {
        let output = self.run_dexcli(args);
        assert!(
            output.status.success(),
            "dexcli {:?} failed (exit {:?}):\nstdout: {}\nstderr: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Run dexcli and assert failure with a specific exit code
    #[allow(dead_code)]
    pub fn run_dexcli_fails(&self, args: &[&str], expected_code: i32) -> Output {
        let output = self.run_dexcli(args);
        assert_eq!(
            output.status.code(),
            Some(expected_code),
            "dexcli {:?} expected exit {} but got {:?}:\nstdout: {}\nstderr: {}",
            args,
            expected_code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Path to the name cache file inside the project
    #[allow(dead_code)]
    pub fn cache_file(&self) -> PathBuf {
        self.dir.path().join("cache").join("names.json")
    }
}

// ============================================================================
// Output assertion helpers
// ============================================================================

/// Parse JSON output and return the value
#[allow(dead_code)]
pub fn parse_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Invalid JSON output:\n{}\nError: {}\nstderr: {}",
            stdout,
            e,
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Assert stdout contains a substring
#[allow(dead_code)]
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(expected),
        "Expected stdout to contain '{}':\n{}",
        expected,
        stdout
    );
}

/// Assert stderr contains a substring
#[allow(dead_code)]
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(expected),
        "Expected stderr to contain '{}':\n{}",
        expected,
        stderr
    );
}

/// Whether the live catalog is reachable. Tests that need it return early
/// when it is not, so the suite passes without network access.
#[allow(dead_code)]
pub fn catalog_available(project: &TestProject) -> bool {
    let output = project.run_dexcli(&["--json", "--timeout", "3s", "context"]);
    if !output.status.success() {
        return false;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str::<serde_json::Value>(&stdout)
        .ok()
        .and_then(|v| v["data"]["catalog"]["reachable"].as_bool())
        .unwrap_or(false)
}
