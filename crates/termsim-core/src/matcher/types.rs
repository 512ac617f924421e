//! Result types produced by a search

use serde::Serialize;

/// A candidate that passed the threshold, with its similarity to the term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    candidate: String,
    similarity: f64,
}

impl Match {
    pub(crate) fn new(candidate: String, similarity: f64) -> Self {
        Self {
            candidate,
            similarity,
        }
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Score in `[0.0, 1.0]`, rounded to two decimals
    pub fn similarity(&self) -> f64 {
        self.similarity
    }
}

/// Outcome of a single search: the term and its matches in candidate order.
///
/// `total` is fixed at construction from the number of matches and cannot
/// drift from it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    term: String,
    matches: Vec<Match>,
    total: usize,
}

impl SearchResults {
    pub fn new(term: impl Into<String>, matches: Vec<Match>) -> Self {
        let total = matches.len();
        Self {
            term: term.into(),
            matches,
            total,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_follows_matches() {
        let results = SearchResults::new(
            "apple",
            vec![
                Match::new("apple".to_string(), 1.0),
                Match::new("pineapple".to_string(), 0.56),
            ],
        );
        assert_eq!(results.total(), 2);
        assert_eq!(results.total(), results.matches().len());
        assert!(!results.is_empty());
    }

    #[test]
    fn test_empty_results() {
        let results = SearchResults::new("kiwi", Vec::new());
        assert_eq!(results.total(), 0);
        assert!(results.is_empty());
        assert_eq!(results.iter().count(), 0);
    }

    #[test]
    fn test_serializes_all_fields() {
        let results = SearchResults::new("apple", vec![Match::new("apple".to_string(), 1.0)]);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "term": "apple",
                "matches": [{ "candidate": "apple", "similarity": 1.0 }],
                "total": 1
            })
        );
    }
}
