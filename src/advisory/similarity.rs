//! Best-window string similarity on a 0-100 scale.
//!
//! `ratio` is the normalized indel similarity `2 * LCS / (len_a + len_b)`.
//! `partial_ratio` slides the shorter string over every window of the same
//! length in the longer one and keeps the best `ratio`. Both work on Unicode
//! scalar values, so results are independent of byte encoding.

/// Similarity of two equal-weight strings, 0.0 to 100.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_ratio(&a, &b)
}

/// Best `ratio` between the shorter string and any equal-length window of the
/// longer string, 0.0 to 100.0. Empty input scores 0.0 unless both are empty.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let score = char_ratio(&shorter, window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let common = longest_common_subsequence(a, b);
    (2 * common) as f64 * 100.0 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for &left in a {
        for (j, &right) in b.iter().enumerate() {
            current[j + 1] = if left == right {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
