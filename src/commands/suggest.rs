//! Suggest command: run the name matcher directly.
//!
//! Useful for scripts that want the correction without the lookup, and for
//! experimenting with the distance threshold via `--max-distance`.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::api::PokeApi;
use crate::cache;
use crate::exit_codes;
use crate::output::{schema, Envelope, Output};
use crate::suggest::{closest_match, levenshtein};
use crate::tips::{show_tip, TipContext};

use super::normalize_query;

#[derive(Debug, Serialize)]
struct SuggestReport {
    query: String,
    max_distance: usize,
    suggestion: Option<String>,
    distance: Option<usize>,
}

pub async fn suggest(
    api: &PokeApi,
    cache_file: &Path,
    raw_query: &str,
    max_distance: usize,
    refresh: bool,
    output: &Output,
) -> Result<i32> {
    let query = normalize_query(raw_query);
    let names = cache::resolve_names(api, cache_file, refresh, output).await?;

    let matched = closest_match(&query, &names, max_distance)
        .map(|candidate| (candidate.to_string(), levenshtein(&query, candidate)));

    if output.is_json() {
        let report = SuggestReport {
            query,
            max_distance,
            suggestion: matched.as_ref().map(|(c, _)| c.clone()),
            distance: matched.as_ref().map(|(_, d)| *d),
        };
        Envelope::new(schema::SUGGEST, &report).print()?;
        return Ok(match report.suggestion {
            Some(_) => exit_codes::FOUND,
            None => exit_codes::MISS_NO_SUGGESTION,
        });
    }

    match matched {
        Some((candidate, distance)) => {
            // The suggestion alone on stdout, so it pipes cleanly.
            output.data(&candidate);
            output.verbose(&format!("distance {} from '{}'", distance, query));
            show_tip(TipContext::Suggest, output.is_quiet());
            Ok(exit_codes::FOUND)
        }
        None => {
            output.info(&format!(
                "Nothing within distance {} of '{}'.",
                max_distance, query
            ));
            Ok(exit_codes::MISS_NO_SUGGESTION)
        }
    }
}
