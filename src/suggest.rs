//! Fuzzy name matching for failed lookups.
//!
//! When a lookup misses, we compare the query against every known name and
//! offer the closest one as a "did you mean" suggestion. Distances are plain
//! Levenshtein: the minimum number of single-character insertions, deletions,
//! and substitutions. Strings are compared per Unicode scalar value, so a
//! multi-byte character counts as one edit unit.
//!
//! Both functions are pure and hold no state; the candidate list is always
//! passed in by the caller (see `cache::resolve_names`).

/// Maximum edit distance at which a suggestion is still offered.
///
/// Fixed at 3 regardless of query length. That over-rejects long names
/// (a 10-character name with 4 typos gets nothing) and is generous for very
/// short ones, but it is the established behavior and changing it would
/// change which queries get suggestions. `suggest --max-distance` exists for
/// experimenting with other values.
pub const SUGGEST_THRESHOLD: usize = 3;

/// Levenshtein distance between `a` and `b`, counted in `char`s.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the full DP matrix; prev is row i-1, cur is row i.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let deletion = cur[j] + 1;
            let insertion = prev[j + 1] + 1;
            let substitution = prev[j] + cost;
            cur[j + 1] = deletion.min(insertion).min(substitution);
        }
        prev.clone_from_slice(&cur);
    }

    prev[b.len()]
}

/// Return the candidate closest to `query`, if any is within `max_distance`.
///
/// Candidates are scanned in list order and the best is replaced only on a
/// strictly smaller distance, so among equidistant candidates the earliest
/// one wins. An exact member of the list (distance 0) is returned as-is.
/// An empty candidate list yields `None`.
pub fn closest_match<'a>(
    query: &str,
    candidates: &'a [String],
    max_distance: usize,
) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(query, candidate);
        let current_best = best.map(|(_, d)| d).unwrap_or(usize::MAX);
        if dist < current_best {
            best = Some((candidate.as_str(), dist));
        }
    }

    match best {
        Some((cand, dist)) if dist <= max_distance => Some(cand),
        _ => None,
    }
}
