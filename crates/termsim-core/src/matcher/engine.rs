//! Threshold search over a candidate list

use super::scoring::similarity;
use super::types::{Match, SearchResults};
use tracing::debug;

/// Score every candidate against `term` and keep those strictly above
/// `threshold`.
///
/// Kept candidates appear in the same order as the input; nothing is
/// re-sorted or deduplicated. Any threshold is accepted: below `0.0` keeps
/// everything, `1.0` or above keeps nothing, and NaN keeps nothing.
///
/// ```rust
/// use termsim_core::search;
///
/// let results = search("kiwi", vec!["apple".to_string(), "orange".to_string()], 0.5);
/// assert_eq!(results.total(), 0);
/// ```
pub fn search<I, S>(term: &str, candidates: I, threshold: f64) -> SearchResults
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanned = 0usize;

    let matches: Vec<Match> = candidates
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let score = similarity(term, candidate);
            (score > threshold).then(|| Match::new(candidate.to_string(), score))
        })
        .collect();

    debug!(
        term = term,
        scanned = scanned,
        kept = matches.len(),
        threshold = threshold,
        "search complete"
    );

    SearchResults::new(term, matches)
}
