use rapidfuzz::fuzz;
use std::collections::BTreeSet;

use crate::matching::Scorer;

/// Token-set similarity (0-100).
///
/// Insensitive to word order and repeated tokens, and it saturates at 100
/// when one side's token set contains the other's. That last property is the
/// important one for survey answers: "vivo en la zona de floresta" must
/// still score 100 against the alias "floresta".
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    // One token set contains the other: perfect score, no edit distance needed
    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    // Compare the sorted shared tokens against each side's full sorted form,
    // and the two full forms against each other; best of the three wins.
    let sect = intersection.join(" ");
    let full_a = join_tokens(&sect, &diff_ab);
    let full_b = join_tokens(&sect, &diff_ba);

    let sect_vs_a = fuzz::ratio(sect.chars(), full_a.chars());
    let sect_vs_b = fuzz::ratio(sect.chars(), full_b.chars());
    let a_vs_b = fuzz::ratio(full_a.chars(), full_b.chars());

    // fuzz::ratio yields 0.0-1.0, converted to percentage
    sect_vs_a.max(sect_vs_b).max(a_vs_b) * 100.0
}

fn join_tokens(sect: &str, diff: &[&str]) -> String {
    if sect.is_empty() {
        diff.join(" ")
    } else if diff.is_empty() {
        sect.to_string()
    } else {
        format!("{} {}", sect, diff.join(" "))
    }
}

/// Default scorer for residence classification.
pub struct TokenSetScorer;

impl TokenSetScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokenSetScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for TokenSetScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        token_set_ratio(query, candidate)
    }

    fn name(&self) -> &str {
        "token_set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(token_set_ratio("palermo", "palermo"), 100.0);
        assert_eq!(token_set_ratio("lomas de zamora", "lomas de zamora"), 100.0);
    }

    #[test]
    fn test_word_order_insensitive() {
        assert_eq!(
            token_set_ratio("zamora de lomas", "lomas de zamora"),
            100.0
        );
    }

    #[test]
    fn test_repeated_tokens_ignored() {
        assert_eq!(token_set_ratio("gerli gerli gerli", "gerli"), 100.0);
    }

    #[test]
    fn test_superset_saturates() {
        assert_eq!(
            token_set_ratio("vivo en la zona de floresta cerca de la estacion", "floresta"),
            100.0
        );
        assert_eq!(token_set_ratio("palermo soho", "palermo"), 100.0);
    }

    #[test]
    fn test_partial_overlap_scores_between() {
        let score = token_set_ratio("san justo", "san jose");
        assert!(score > 50.0 && score < 100.0, "got {score}");
    }

    #[test]
    fn test_typo_scores_on_percentage_scale() {
        // single edit in a seven-letter token: 1 - 2/14 = 85.7, which must
        // clear the looser cutoff of 80 but not the stricter 89
        let score = token_set_ratio("quilmas", "quilmes");
        assert!(score > 80.0 && score < 89.0, "got {score}");

        let close = token_set_ratio("qilmes", "quilmes");
        assert!(close > 89.0 && close < 100.0, "got {close}");
    }

    #[test]
    fn test_disjoint_is_low() {
        let score = token_set_ratio("xyzabc123", "palermo");
        assert!(score < 50.0, "got {score}");
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(token_set_ratio("", "palermo"), 0.0);
        assert_eq!(token_set_ratio("palermo", ""), 0.0);
        assert_eq!(token_set_ratio("", ""), 0.0);
    }

    #[test]
    fn test_bounded() {
        let pairs = [
            ("caballito", "caballo"),
            ("villa urquiza", "villa pueyrredon"),
            ("a b c", "c d e"),
        ];
        for (a, b) in pairs {
            let score = token_set_ratio(a, b);
            assert!((0.0..=100.0).contains(&score), "{a:?} vs {b:?}: {score}");
        }
    }
}
