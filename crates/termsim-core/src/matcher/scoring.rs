//! Normalized similarity derived from edit distance

use crate::distance::levenshtein;

/// Similarity of `a` and `b` in `[0.0, 1.0]`, rounded to two decimals.
///
/// Before rounding, `1.0` means the strings are identical and `0.0` means
/// every position of the longer string had to be edited. Rounding to
/// hundredths keeps both readings exact only while the longer string has
/// fewer than 200 characters: past that, one edit can still round to `1.0`
/// and a single surviving character can round to `0.0`. Two empty strings
/// score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b);
    let score = (max_len - distance) as f64 / max_len as f64;

    round_to_hundredths(score)
}

/// Half-away-from-zero rounding to two decimal places.
#[inline]
fn round_to_hundredths(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
