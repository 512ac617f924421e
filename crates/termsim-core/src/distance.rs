//! Levenshtein edit distance
//!
//! Minimum number of single-character insertions, deletions or substitutions
//! needed to turn one string into another. Characters are Unicode scalar
//! values, so `"é"` counts as one character regardless of its UTF-8 width.

/// Edit distance between `a` and `b`.
///
/// Runs the classic prefix-length recurrence but keeps only the previous and
/// current rows of the cost matrix, so memory is linear in the shorter input.
///
/// ```rust
/// use termsim_core::levenshtein;
///
/// assert_eq!(levenshtein("pineapple", "apple"), 4);
/// assert_eq!(levenshtein("", "knitting"), 8);
/// assert_eq!(levenshtein("same", "same"), 0);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Distance is symmetric, so the shorter string indexes the columns
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if cols.is_empty() {
        return rows.len();
    }

    let mut prev_row: Vec<usize> = (0..=cols.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; cols.len() + 1];

    for (i, row_char) in rows.iter().enumerate() {
        // Deleting the first i + 1 characters
        curr_row[0] = i + 1;

        for (j, col_char) in cols.iter().enumerate() {
            let substitution_cost = usize::from(row_char != col_char);

            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + substitution_cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    // After the final swap the last computed row lives in prev_row
    prev_row[cols.len()]
}
