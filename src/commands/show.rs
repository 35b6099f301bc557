//! Show command: look up one Pokémon and print its card.
//!
//! A miss is not an error: the query is compared against every known name
//! and the closest one within the distance threshold is offered. On an
//! interactive terminal the suggestion can be accepted, which re-runs the
//! lookup once; a second miss is reported without another suggestion pass.

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::Path;

use crate::api::{Lookup, PokeApi, Pokemon};
use crate::cache;
use crate::card::{self, Card};
use crate::exit_codes;
use crate::output::{schema, Envelope, Output};
use crate::suggest::{closest_match, SUGGEST_THRESHOLD};
use crate::tips::{show_tip, TipContext};

use super::normalize_query;

/// JSON payload for a lookup miss.
#[derive(Debug, Serialize)]
struct MissReport {
    query: String,
    found: bool,
    suggestion: Option<String>,
}

pub async fn show(
    api: &PokeApi,
    cache_file: &Path,
    raw_query: &str,
    refresh: bool,
    no_input: bool,
    output: &Output,
) -> Result<i32> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        bail!("Query is empty");
    }

    match api.fetch_pokemon(&query).await? {
        Lookup::Found(pokemon) => print_found(api, pokemon, output).await,
        Lookup::NotFound => on_miss(api, cache_file, &query, refresh, no_input, output).await,
    }
}

/// Fetch the species record and render the card.
async fn print_found(api: &PokeApi, pokemon: Pokemon, output: &Output) -> Result<i32> {
    let species = api.fetch_species(&pokemon.species.url).await?;
    let card = Card::assemble(pokemon, species);

    if output.is_json() {
        Envelope::new(schema::POKEMON, &card).print()?;
    } else {
        card::print_human(&card);
    }
    Ok(exit_codes::FOUND)
}

async fn on_miss(
    api: &PokeApi,
    cache_file: &Path,
    query: &str,
    refresh: bool,
    no_input: bool,
    output: &Output,
) -> Result<i32> {
    let names = cache::resolve_names(api, cache_file, refresh, output).await?;
    let suggestion = closest_match(query, &names, SUGGEST_THRESHOLD);

    if output.is_json() {
        let report = MissReport {
            query: query.to_string(),
            found: false,
            suggestion: suggestion.map(str::to_string),
        };
        Envelope::new(schema::LOOKUP, &report).print()?;
        return Ok(match report.suggestion {
            Some(_) => exit_codes::MISS_WITH_SUGGESTION,
            None => exit_codes::MISS_NO_SUGGESTION,
        });
    }

    let Some(candidate) = suggestion else {
        println!("No Pokémon named '{}', and nothing close to it.", query);
        show_tip(
            TipContext::Miss {
                had_suggestion: false,
            },
            output.is_quiet(),
        );
        return Ok(exit_codes::MISS_NO_SUGGESTION);
    };

    println!("No Pokémon named '{}'.", query);

    if can_prompt(no_input, output) {
        let accept = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", candidate))
            .default(true)
            .interact()?;
        if accept {
            return lookup_suggestion(api, candidate, output).await;
        }
    } else {
        println!("Did you mean '{}'?", candidate.bold());
    }

    show_tip(
        TipContext::Miss {
            had_suggestion: true,
        },
        output.is_quiet(),
    );
    Ok(exit_codes::MISS_WITH_SUGGESTION)
}

/// Re-run the lookup for an accepted suggestion. The suggestion came from
/// the name list, so a miss here means the cached list is stale; report it
/// plainly instead of suggesting again.
async fn lookup_suggestion(api: &PokeApi, name: &str, output: &Output) -> Result<i32> {
    match api.fetch_pokemon(name).await? {
        Lookup::Found(pokemon) => print_found(api, pokemon, output).await,
        Lookup::NotFound => {
            println!(
                "'{}' is in the cached name list but the catalog has no entry for it. \
                 Try `dexcli names --refresh`.",
                name
            );
            Ok(exit_codes::MISS_WITH_SUGGESTION)
        }
    }
}

/// Prompts need a terminal on both ends and no flag telling us not to.
fn can_prompt(no_input: bool, output: &Output) -> bool {
    !no_input
        && !output.is_quiet()
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal()
}
