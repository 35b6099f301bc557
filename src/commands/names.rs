//! Names command: dump the known name list, optionally filtered.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::api::PokeApi;
use crate::cache;
use crate::exit_codes;
use crate::output::{schema, Envelope, Output};
use crate::tips::{show_tip, TipContext};

#[derive(Debug, Serialize)]
struct NamesReport {
    total_known: usize,
    count: usize,
    names: Vec<String>,
}

pub async fn names(
    api: &PokeApi,
    cache_file: &Path,
    prefix: Option<&str>,
    limit: Option<usize>,
    refresh: bool,
    output: &Output,
) -> Result<i32> {
    let all = cache::resolve_names(api, cache_file, refresh, output).await?;
    let total_known = all.len();
    let selected = filter_names(all, prefix, limit);

    if output.is_json() {
        let report = NamesReport {
            total_known,
            count: selected.len(),
            names: selected,
        };
        Envelope::new(schema::NAMES, &report).print()?;
        return Ok(exit_codes::FOUND);
    }

    for name in &selected {
        output.data(name);
    }
    output.info(&format!("{} of {} names", selected.len(), total_known));
    show_tip(TipContext::Names { refreshed: refresh }, output.is_quiet());
    Ok(exit_codes::FOUND)
}

fn filter_names(all: Vec<String>, prefix: Option<&str>, limit: Option<usize>) -> Vec<String> {
    let mut selected = all;
    if let Some(prefix) = prefix {
        let prefix = prefix.trim().to_ascii_lowercase();
        selected.retain(|name| name.starts_with(&prefix));
    }
    if let Some(limit) = limit {
        selected.truncate(limit);
    }
    selected
}
