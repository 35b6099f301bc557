//! Exit code policy for dexcli.
//!
#![allow(dead_code)] // Constants defined for policy documentation, used selectively
//!
//! ## Lookup outcomes (0-2)
//!
//! Lookup and suggestion commands return exit codes based on what they found:
//! - `0` = Found (the query resolved, or a suggestion was produced)
//! - `1` = Miss with suggestion (no such name, but a close one exists)
//! - `2` = Miss without suggestion (nothing within the distance threshold)
//!
//! ## Operational Failures (10+)
//!
//! Operational failures (network issues, invalid config, internal errors)
//! use codes >= 10 to distinguish from outcomes:
//! - `10` = General operational failure
//! - `11` = Network failure (the catalog could not be reached)
//! - `12` = Configuration error
//!
//! This separation allows automation to distinguish between:
//! - "That name does not exist" (outcome, 1-2)
//! - "We couldn't ask the catalog" (operational failure, 10+)

/// Exit code: the lookup resolved (or the command produced its answer)
pub const FOUND: i32 = 0;

/// Exit code: miss, but a suggestion within the threshold exists
pub const MISS_WITH_SUGGESTION: i32 = 1;

/// Exit code: miss and no candidate was close enough
pub const MISS_NO_SUGGESTION: i32 = 2;

/// Exit code: general operational failure
pub const OPERATIONAL_FAILURE: i32 = 10;

/// Exit code: network failure reaching the catalog API
pub const NETWORK_FAILURE: i32 = 11;

/// Exit code: configuration error
pub const CONFIG_ERROR: i32 = 12;

/// Exit code: interrupted by Ctrl+C (SIGINT)
pub const INTERRUPTED: i32 = 130;
