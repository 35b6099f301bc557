use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod api;
mod cache;
mod card;
mod commands;
mod config;
mod exit_codes;
mod help;
mod output;
mod suggest;
mod tips;

use api::PokeApi;
use config::Config;
use help::LLM_HELP;
use output::{HelpResponse, JsonError, LlmHelpResponse, Output, VersionResponse};
use suggest::SUGGEST_THRESHOLD;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "dexcli")]
#[command(version = VERSION)]
#[command(about = "Pokédex lookups with typo correction", long_about = None)]
#[command(
    after_help = "For AI agents and LLMs: Use --help-llm for structured, detailed information suitable for programmatic usage."
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Show detailed help for AI agents and LLMs (structured output)
    #[arg(long = "help-llm", global = true)]
    help_llm: bool,

    /// API base URL (overrides DEXCLI_API_URL env var and config file)
    #[arg(long = "api-url", global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Request timeout (e.g., "5s", "500ms"). Default: 10s
    #[arg(long = "timeout", global = true, value_name = "DURATION")]
    timeout: Option<String>,

    /// Path to config file (default: ./dexcli.toml)
    #[arg(long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Never prompt; skip any confirmation instead of asking
    #[arg(long = "no-input", global = true)]
    no_input: bool,

    /// Minimal output (errors only)
    #[arg(long, global = true)]
    quiet: bool,

    /// Extra detail on stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a Pokémon by name or id and print its card
    Show {
        /// Name or numeric id (e.g., "pikachu", "150")
        query: String,
        /// Refetch the name list even if a cached copy exists
        #[arg(long)]
        refresh: bool,
    },
    /// Print the closest known name for a query without looking it up
    Suggest {
        /// The (possibly misspelled) name
        query: String,
        /// Largest edit distance still considered a match
        #[arg(long = "max-distance", default_value_t = SUGGEST_THRESHOLD, value_name = "N")]
        max_distance: usize,
        /// Refetch the name list even if a cached copy exists
        #[arg(long)]
        refresh: bool,
    },
    /// List known names, optionally filtered by prefix
    Names {
        /// Keep only names starting with this prefix
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,
        /// Show at most this many names
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Refetch the name list even if a cached copy exists
        #[arg(long)]
        refresh: bool,
    },
    /// Show effective configuration, cache state, and catalog reachability
    Context,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before parsing CLI so env vars are available)
    let _ = dotenvy::dotenv();

    // Check for --json flag early (before full parsing) for error handling
    let json_mode = std::env::args().any(|arg| arg == "--json");

    // Handle --help-llm early (before clap parse fails due to missing subcommand)
    // This is a special case because --help-llm should work without a subcommand
    if std::env::args().any(|arg| arg == "--help-llm") {
        if json_mode {
            LlmHelpResponse::new(LLM_HELP.to_string()).print();
        } else {
            print!("{}", LLM_HELP);
        }
        std::process::exit(0);
    }

    // Use try_parse to handle clap errors in JSON mode
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Handle meta UX flags (--help, --version) in JSON mode
            if json_mode {
                match e.kind() {
                    ErrorKind::DisplayHelp => {
                        HelpResponse::new(e.to_string()).print();
                        std::process::exit(0);
                    }
                    ErrorKind::DisplayVersion => {
                        VersionResponse::new(VERSION.to_string()).print();
                        std::process::exit(0);
                    }
                    _ => {
                        // Usage errors keep clap's conventional exit code
                        JsonError::new(e.to_string()).print();
                        std::process::exit(2);
                    }
                }
            } else {
                // Human mode: let clap print its formatted output
                e.exit();
            }
        }
    };

    let output = Output::new(cli.json, cli.quiet, cli.verbose);

    match run(cli, &output).await {
        Ok(code) => {
            if code != exit_codes::FOUND {
                std::process::exit(code);
            }
        }
        Err(e) => {
            let code = if e.downcast_ref::<reqwest::Error>().is_some() {
                exit_codes::NETWORK_FAILURE
            } else if e.downcast_ref::<config::ConfigError>().is_some() {
                exit_codes::CONFIG_ERROR
            } else {
                exit_codes::OPERATIONAL_FAILURE
            };
            if json_mode {
                // JSON mode: structured error to stdout with the full chain
                let full_chain = format!("{e:#}");
                JsonError::with_details(e.to_string(), full_chain).print();
            } else {
                // Human mode: error to stderr with full chain
                eprintln!("Error: {e:#}");
            }
            std::process::exit(code);
        }
    }
}

async fn run(cli: Cli, output: &Output) -> Result<i32> {
    let config =
        Config::load(cli.config_path.as_deref()).context("Failed to load configuration")?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let timeout = config.resolve_timeout(cli.timeout.as_deref())?;
    let api = PokeApi::new(&api_url, timeout)?;
    let cache_file = cache::cache_path(&config);

    match cli.command {
        Commands::Show { query, refresh } => {
            commands::show(&api, &cache_file, &query, refresh, cli.no_input, output).await
        }
        Commands::Suggest {
            query,
            max_distance,
            refresh,
        } => commands::suggest(&api, &cache_file, &query, max_distance, refresh, output).await,
        Commands::Names {
            prefix,
            limit,
            refresh,
        } => commands::names(&api, &cache_file, prefix.as_deref(), limit, refresh, output).await,
        Commands::Context => {
            let config_file = resolve_config_file(cli.config_path.as_deref());
            commands::context(&api, timeout, config_file.as_deref(), &cache_file, output).await
        }
    }
}

/// Which config file is actually in effect, for reporting.
fn resolve_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let default = Path::new("dexcli.toml");
            default.exists().then(|| default.to_path_buf())
        }
    }
}
