use super::policy::ScoringPolicy;
use super::text::{normalize_tokens, similarity, token_overlap};

const NEUTRAL_SCORE: f64 = 50.0;
const MATCHED_THRESHOLD: f64 = 30.0;
const OVERLAP_WEIGHT: f64 = 30.0;

pub(crate) const SKILL_BONUS_CAP: f64 = 10.0;
pub(crate) const ELIGIBILITY_BONUS_CAP: f64 = 15.0;

/// Percentage score for a requirement list plus how many entries were met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementMatch {
    pub score: f64,
    pub matched: usize,
}

impl RequirementMatch {
    const fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            matched: 0,
        }
    }

    const fn unmet() -> Self {
        Self {
            score: 0.0,
            matched: 0,
        }
    }
}

/// Match every required item against the candidate items.
///
/// `bonus_cap` bounds the credit given for candidate items beyond the number required.
pub fn match_requirements(
    required: &[String],
    candidates: &[String],
    bonus_cap: f64,
    policy: &ScoringPolicy,
) -> RequirementMatch {
    if required.is_empty() {
        return RequirementMatch::neutral();
    }
    if candidates.is_empty() {
        return RequirementMatch::unmet();
    }

    let candidate_tokens: Vec<Vec<String>> = candidates
        .iter()
        .map(|candidate| normalize_tokens(candidate, policy))
        .collect();

    let mut best_matches: Vec<f64> = required
        .iter()
        .map(|item| best_match(item, candidates, &candidate_tokens, policy))
        .collect();

    let matched = best_matches
        .iter()
        .filter(|strength| **strength >= MATCHED_THRESHOLD)
        .count();

    // Summation order is fixed so permuted inputs produce bit-identical scores.
    best_matches.sort_by(f64::total_cmp);
    let total: f64 = best_matches.iter().sum();
    let base = total / (required.len() as f64 * 100.0) * 100.0;

    let excess = candidates.len().saturating_sub(required.len()) as f64;
    let bonus = (2.0 * excess).min(bonus_cap);

    RequirementMatch {
        score: (base + bonus).min(100.0),
        matched,
    }
}

fn best_match(
    required: &str,
    candidates: &[String],
    candidate_tokens: &[Vec<String>],
    policy: &ScoringPolicy,
) -> f64 {
    let required_tokens = normalize_tokens(required, policy);
    let mut best = 0.0_f64;

    for (candidate, tokens) in candidates.iter().zip(candidate_tokens) {
        let score = similarity(required, candidate);
        let strength = if score >= 100.0 {
            return 100.0;
        } else if score >= 80.0 {
            80.0
        } else if score >= 50.0 {
            50.0
        } else {
            token_overlap(&required_tokens, tokens) * OVERLAP_WEIGHT
        };
        best = best.max(strength);
    }

    best
}

/// Eligibility matching, treating sentinel-only requirements as no requirement.
pub fn match_eligibilities(
    required: &[String],
    held: &[String],
    policy: &ScoringPolicy,
) -> RequirementMatch {
    if eligibility_waived(required, policy) {
        return RequirementMatch::neutral();
    }
    match_requirements(required, held, ELIGIBILITY_BONUS_CAP, policy)
}

pub fn match_skills(
    required: &[String],
    held: &[String],
    policy: &ScoringPolicy,
) -> RequirementMatch {
    match_requirements(required, held, SKILL_BONUS_CAP, policy)
}

/// True when a job lists no eligibility or only "none"-style placeholders.
pub(crate) fn eligibility_waived(required: &[String], policy: &ScoringPolicy) -> bool {
    required
        .iter()
        .all(|entry| policy.is_eligibility_sentinel(entry))
}
