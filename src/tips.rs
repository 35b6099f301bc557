//! Contextual tips shown after commands to improve discoverability.
//!
//! Tips are shown:
//! - Only when stderr is a TTY (not in scripts/CI)
//! - Only when --quiet is not set
//! - One tip per command max
//! - Formatted subtly (dim text) so they don't look like command output

use std::io::{IsTerminal, Write};

/// Context for selecting an appropriate tip after a command.
pub enum TipContext {
    /// After a lookup miss, with or without a suggestion to point at
    Miss { had_suggestion: bool },
    /// After a direct `suggest` run
    Suggest,
    /// After listing names
    Names { refreshed: bool },
}

/// Show a contextual tip if appropriate.
///
/// Tips are suppressed if:
/// - quiet mode is enabled
/// - stderr is not a TTY
pub fn show_tip(ctx: TipContext, quiet: bool) {
    if quiet {
        return;
    }

    // Only show tips on interactive terminals
    if !std::io::stderr().is_terminal() {
        return;
    }

    let tip = select_tip(ctx);

    // Print to stderr so it doesn't interfere with piped output
    let mut stderr = std::io::stderr();
    // Use dim ANSI escape for subtle appearance
    let _ = writeln!(stderr, "\n\x1b[2mTip: {}\x1b[0m", tip);
}

/// Select the most relevant tip for the given context.
fn select_tip(ctx: TipContext) -> &'static str {
    match ctx {
        TipContext::Miss { had_suggestion } => {
            if had_suggestion {
                "`dexcli suggest <query>` shows the closest known name without the lookup"
            } else {
                "`dexcli names --prefix <letters>` lists known names to browse"
            }
        }
        TipContext::Suggest => {
            "`dexcli show <name>` looks the suggestion up; `--max-distance` widens the net"
        }
        TipContext::Names { refreshed } => {
            if refreshed {
                "`dexcli context` shows where the name cache is stored"
            } else {
                "`dexcli names --refresh` refetches the list if the catalog has grown"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_selection() {
        // Just verify tips are non-empty for each context
        let contexts = vec![
            TipContext::Miss {
                had_suggestion: true,
            },
            TipContext::Miss {
                had_suggestion: false,
            },
            TipContext::Suggest,
            TipContext::Names { refreshed: false },
            TipContext::Names { refreshed: true },
        ];

        for ctx in contexts {
            let tip = select_tip(ctx);
            assert!(!tip.is_empty());
            assert!(tip.contains("dexcli"));
        }
    }
}
