use std::cmp::Ordering;

use super::policy::ScoringPolicy;
use super::text::similarity;

const SAME_LEVEL_FLOOR: f64 = 75.0;
const HIGHER_LEVEL_BONUS: f64 = 15.0;
const LOWER_LEVEL_PENALTY: f64 = 20.0;
const RELATED_FIELD_FLOOR: f64 = 85.0;
const MINIMUM_CREDIT: f64 = 30.0;

/// Score the applicant's highest attainment against the required degree.
pub fn score_education(required: &str, attainment: &str, policy: &ScoringPolicy) -> f64 {
    let required = required.trim().to_lowercase();
    let attainment = attainment.trim().to_lowercase();

    let mut score = similarity(&required, &attainment);

    if let (Some(required_level), Some(applicant_level)) = (
        policy.education_level(&required),
        policy.education_level(&attainment),
    ) {
        score = match applicant_level.cmp(&required_level) {
            Ordering::Equal => score.max(SAME_LEVEL_FLOOR),
            Ordering::Greater => (score + HIGHER_LEVEL_BONUS).min(100.0),
            Ordering::Less => (score - LOWER_LEVEL_PENALTY).max(MINIMUM_CREDIT),
        };
    }

    if related_field_match(&required, &attainment, policy) {
        score = score.max(RELATED_FIELD_FLOOR);
    }

    score.max(MINIMUM_CREDIT)
}

fn related_field_match(required: &str, attainment: &str, policy: &ScoringPolicy) -> bool {
    policy
        .related_fields
        .iter()
        .filter(|(field, _)| required.contains(field.as_str()))
        .any(|(_, related)| {
            related
                .iter()
                .any(|term| attainment.contains(term.as_str()))
        })
}
