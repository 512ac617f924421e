//! Similarity scoring and threshold search
//!
//! A candidate's similarity to a term is the share of the longer string that
//! survives unedited:
//!
//! ```text
//! similarity = (max_len - levenshtein(term, candidate)) / max_len
//! ```
//!
//! rounded to two decimal places. `search` keeps the candidates whose score is
//! strictly greater than the threshold, in input order.
//!
//! # Example
//!
//! ```rust
//! use termsim_core::matcher::search;
//!
//! let results = search("apple", ["apple", "pineapple", "orange"], 0.0);
//! let scores: Vec<f64> = results.iter().map(|m| m.similarity()).collect();
//! assert_eq!(scores, vec![1.0, 0.56, 0.17]);
//! ```

mod engine;
mod scoring;
mod types;

pub use engine::search;
pub use scoring::similarity;
pub use types::{Match, SearchResults};
