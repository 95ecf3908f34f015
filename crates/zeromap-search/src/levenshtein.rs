//! Edit distance over Unicode code points.

/// Classic Levenshtein distance: insert, delete, and substitute all cost 1.
///
/// Computed over `char`s, so multi-byte Hangul counts one step per syllable
/// block. Two-row dynamic programming, O(len(a) * len(b)) time.
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr: Vec<usize> = vec![0; a.len() + 1];

    for (j, bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, ac) in a.iter().enumerate() {
            let substitution = prev[i] + usize::from(ac != bc);
            curr[i + 1] = substitution.min(prev[i + 1] + 1).min(curr[i] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len)`.
///
/// Two empty strings are identical, so they score `1.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance(a, b) as f64 / max_len as f64
}
