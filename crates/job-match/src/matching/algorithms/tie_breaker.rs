use crate::matching::domain::{AlgorithmUsed, DimensionScores, ScoreBreakdown};

const ELIGIBILITY_POINTS: f64 = 40.0;
const WAIVED_ELIGIBILITY_POINTS: f64 = 20.0;
const DEGREE_POINTS: f64 = 30.0;
const EXPERIENCE_POINTS: f64 = 20.0;
const SKILL_DIVERSITY_CAP: f64 = 20.0;
const SKILL_DIVERSITY_FACTOR: f64 = 0.10;

/// Priority-ordered additive score: license, then degree, tenure and skill breadth.
pub fn eligibility_education_tie_breaker(dimensions: &DimensionScores) -> ScoreBreakdown {
    let mut steps = Vec::with_capacity(4);

    let eligibility = if dimensions.eligibility_waived {
        steps.push(format!("1. No eligibility required: +{WAIVED_ELIGIBILITY_POINTS:.2}"));
        WAIVED_ELIGIBILITY_POINTS
    } else {
        let points = dimensions.eligibility / 100.0 * ELIGIBILITY_POINTS;
        steps.push(format!(
            "1. Eligibility match {:.2}%: +{points:.2}",
            dimensions.eligibility
        ));
        points
    };

    let degree = dimensions.education / 100.0 * DEGREE_POINTS;
    steps.push(format!("2. Degree match {:.2}%: +{degree:.2}", dimensions.education));

    let experience = dimensions.experience / 100.0 * EXPERIENCE_POINTS;
    steps.push(format!("3. Experience {:.2}%: +{experience:.2}", dimensions.experience));

    let diversity = (dimensions.matched_skills as f64 * 10.0).min(SKILL_DIVERSITY_CAP)
        * SKILL_DIVERSITY_FACTOR;
    steps.push(format!(
        "4. Skill diversity ({} matched): +{diversity:.2}",
        dimensions.matched_skills
    ));

    let total = eligibility + degree + experience + diversity;
    let reasoning = format!("Tie-breaker: {}. Total {total:.2}.", steps.join("; "));

    ScoreBreakdown::from_dimensions(
        dimensions,
        total,
        AlgorithmUsed::EligibilityEducationTieBreaker,
        reasoning,
    )
}
