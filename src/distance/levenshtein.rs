//! Levenshtein distance.
//!
//! # Time Complexity
//! O(m × n) where m, n are the character counts of the inputs.
//!
//! # Space Complexity
//! O(min(m, n)): only the previous and current rows are kept.

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`. Characters are Unicode
/// scalar values, so a character outside the Basic Multilingual Plane
/// counts as one edit, not two UTF-16 code units.
///
/// ```
/// use route_fuzz::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Levenshtein distance over pre-split character slices.
///
/// Lets a caller decode one side once and compare it against many others.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Rows run along the shorter input
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                let substitution = prev[j];
                let insertion = curr[j];
                let deletion = prev[j + 1];
                1 + substitution.min(insertion).min(deletion)
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
