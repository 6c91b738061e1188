//! Tokenization and fuzzy string comparison shared by every scorer.

use super::policy::ScoringPolicy;

const MIN_TOKEN_LEN: usize = 3;

/// Lower-case word tokens with punctuation stripped, short tokens and stopwords removed.
pub fn normalize_tokens(text: &str, policy: &ScoringPolicy) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace() || *ch == '_')
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .filter(|token| !policy.is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Fraction of `required` tokens that also occur in `candidate`, in `[0, 1]`.
pub(crate) fn token_overlap(required: &[String], candidate: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let common = required
        .iter()
        .filter(|token| candidate.contains(token))
        .count();
    common as f64 / required.len() as f64
}

/// Normalized Levenshtein similarity as a percentage in `[0, 100]`.
///
/// Comparison is case-insensitive and ignores surrounding whitespace. An empty
/// side always scores 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 100.0;
    }

    let max_len = a.chars().count().max(b.chars().count()) as f64;
    let distance = strsim::levenshtein(&a, &b) as f64;
    ((max_len - distance) / max_len * 100.0).max(0.0)
}
