// src/services/similarity.rs
//! Token-set fuzzy matching.
//!
//! Both strings are split into whitespace-separated token sets. The shared
//! tokens are compared against each side's shared-plus-leftover tokens, which
//! makes the score insensitive to word order and to one name being a subset
//! of the other ("MIT - Massachusetts Institute of Technology" fully contains
//! "Massachusetts Institute of Technology").

use std::collections::BTreeSet;

/// Indel-based similarity between two strings in `[0, 100]`.
///
/// Two empty strings are considered identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    let distance = total - 2 * lcs_len(&a, &b);
    100.0 * (1.0 - distance as f64 / total as f64)
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn join(tokens: &BTreeSet<&str>) -> String {
    tokens.iter().copied().collect::<Vec<_>>().join(" ")
}

fn with_prefix(sect: &str, rest: &str) -> String {
    match (sect.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => sect.to_string(),
        (false, false) => format!("{} {}", sect, rest),
    }
}

/// Token-set ratio of two already-cleaned strings in `[0, 100]`.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: BTreeSet<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: BTreeSet<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: BTreeSet<&str> = tokens_b.difference(&tokens_a).copied().collect();

    // one side is fully contained in the other
    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let sect = join(&intersection);
    let combined_ab = with_prefix(&sect, &join(&diff_ab));
    let combined_ba = with_prefix(&sect, &join(&diff_ba));

    let mut best = ratio(&combined_ab, &combined_ba);
    if !sect.is_empty() {
        best = best
            .max(ratio(&sect, &combined_ab))
            .max(ratio(&sect, &combined_ba));
    }
    best
}

/// Rounds a ratio to a whole percentage
pub fn round_score(ratio: f64) -> u8 {
    ratio.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_set_score(a: &str, b: &str) -> u8 {
        round_score(token_set_ratio(a, b))
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ratio_basics() {
        assert!(approx_eq(ratio("", ""), 100.0));
        assert!(approx_eq(ratio("abc", "abc"), 100.0));
        assert!(approx_eq(ratio("abc", "xyz"), 0.0));
        // lcs("abcd", "abce") = 3, distance = 2 over 8 chars
        assert!(approx_eq(ratio("abcd", "abce"), 75.0));
    }

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(token_set_score("state university", "state university"), 100);
    }

    #[test]
    fn test_subset_scores_100() {
        assert_eq!(
            token_set_score(
                "massachusetts institute of technology",
                "mit  massachusetts institute of technology"
            ),
            100
        );
        assert_eq!(
            token_set_score("example university", "example university  home"),
            100
        );
    }

    #[test]
    fn test_word_order_does_not_matter() {
        assert_eq!(token_set_score("university state", "state university"), 100);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        let score = token_set_score("foo college", "unrelated corp homepage");
        assert!(score < 60, "score was {}", score);
    }

    #[test]
    fn test_partial_overlap_uses_intersection() {
        // sect = "state", ab = "state alpha", ba = "state beta"
        let expected = ratio("state alpha", "state beta")
            .max(ratio("state", "state alpha"))
            .max(ratio("state", "state beta"));
        assert!(approx_eq(token_set_ratio("alpha state", "state beta"), expected));
        // "state" vs "state beta": distance 5 over 15 chars
        assert!(approx_eq(expected, 100.0 * (1.0 - 5.0 / 15.0)));
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(token_set_score("", "state university"), 0);
        assert_eq!(token_set_score("   ", "   "), 0);
    }

    #[test]
    fn test_symmetric() {
        let a = "springfield community college";
        let b = "welcome to springfield cc";
        assert!(approx_eq(token_set_ratio(a, b), token_set_ratio(b, a)));
    }
}
