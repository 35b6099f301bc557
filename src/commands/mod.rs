//! Command implementations for the dexcli CLI.
//!
//! Each submodule contains one command.

mod context;
mod names;
mod show;
mod suggest;

pub use context::context;
pub use names::names;
pub use show::show;
pub use suggest::suggest;

/// Queries are matched the way the catalog stores names: trimmed,
/// ASCII-lowercased. Numeric ids pass through unchanged.
pub(crate) fn normalize_query(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_query("  Pikachu "), "pikachu");
        assert_eq!(normalize_query("MR-MIME"), "mr-mime");
        assert_eq!(normalize_query("150"), "150");
        assert_eq!(normalize_query("   "), "");
    }
}
