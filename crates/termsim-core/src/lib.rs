//! termsim Core
//!
//! Fuzzy string matching over a flat list of candidates:
//!
//! - `distance` - Levenshtein edit distance (two-row dynamic programming)
//! - `matcher` - normalized similarity scores and threshold-filtered search
//!
//! Strings are compared codepoint-by-codepoint. Every operation is total:
//! empty strings, empty candidate lists and out-of-range thresholds are all
//! legal inputs.
//!
//! # Example
//!
//! ```rust
//! use termsim_core::{levenshtein, search, similarity};
//!
//! assert_eq!(levenshtein("kitten", "knitting"), 3);
//! assert_eq!(similarity("pineapple", "apple"), 0.56);
//!
//! let results = search("apple", ["apple", "pineapple", "orange"], 0.5);
//! assert_eq!(results.total(), 2);
//! assert_eq!(results.matches()[1].candidate(), "pineapple");
//! ```

pub mod distance;
pub mod matcher;

// Re-export main types at crate root
pub use distance::levenshtein;
pub use matcher::{search, similarity, Match, SearchResults};
