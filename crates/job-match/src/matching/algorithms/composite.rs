use crate::matching::domain::{AlgorithmUsed, DimensionScores, ScoreBreakdown};
use crate::matching::experience::effective_required_years;

const RATIO_CAP: f64 = 2.0;
const DECAY_RATE: f64 = 0.5;
const COMPOSITE_WEIGHT: f64 = 0.40;
const EDUCATION_WEIGHT: f64 = 0.35;
const ELIGIBILITY_WEIGHT: f64 = 0.25;

/// Skills scaled by an exponential experience factor that reaches 1.0 at twice the required years.
pub(crate) fn composite_score(skills: f64, applicant_years: f64, required_years: f64) -> f64 {
    let ratio = (applicant_years / effective_required_years(required_years)).min(RATIO_CAP);
    skills * (DECAY_RATE * ratio).exp() / (DECAY_RATE * RATIO_CAP).exp()
}

/// Rewards candidates strong in skills and experience at the same time.
///
/// Experience only enters through the composite factor; there is no separate
/// experience term in the final sum.
pub fn skill_experience_composite(
    dimensions: &DimensionScores,
    applicant_years: f64,
    required_years: f64,
) -> ScoreBreakdown {
    let composite = composite_score(dimensions.skills, applicant_years, required_years);
    let total = COMPOSITE_WEIGHT * composite
        + EDUCATION_WEIGHT * dimensions.education
        + ELIGIBILITY_WEIGHT * dimensions.eligibility;

    let reasoning = format!(
        "Skill-experience composite {composite:.2} \
         (skills {:.2} at {applicant_years} of {required_years} required years) x 0.40 = {:.2}; \
         education {:.2} x 0.35 = {:.2}; eligibility {:.2} x 0.25 = {:.2}. Total {total:.2}.",
        dimensions.skills,
        COMPOSITE_WEIGHT * composite,
        dimensions.education,
        EDUCATION_WEIGHT * dimensions.education,
        dimensions.eligibility,
        ELIGIBILITY_WEIGHT * dimensions.eligibility,
    );

    ScoreBreakdown::from_dimensions(
        dimensions,
        total,
        AlgorithmUsed::SkillExperienceComposite,
        reasoning,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimensions(skills: f64, experience: f64) -> DimensionScores {
        DimensionScores {
            education: 60.0,
            experience,
            skills,
            eligibility: 40.0,
            matched_skills: 0,
            matched_eligibilities: 0,
            eligibility_waived: false,
        }
    }

    #[test]
    fn composite_saturates_at_double_the_requirement() {
        assert!((composite_score(80.0, 4.0, 2.0) - 80.0).abs() < 1e-9);
        assert!((composite_score(80.0, 10.0, 2.0) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn zero_experience_discounts_skills() {
        let expected = 100.0 * (-1.0_f64).exp();
        assert!((composite_score(100.0, 0.0, 3.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn total_combines_composite_education_and_eligibility() {
        let result = skill_experience_composite(&dimensions(100.0, 0.0), 2.0, 1.0);
        // 0.40 * 100 + 0.35 * 60 + 0.25 * 40
        assert_eq!(result.total_score, 71.0);
        assert_eq!(result.algorithm_used, AlgorithmUsed::SkillExperienceComposite);
    }

    #[test]
    fn experience_dimension_does_not_enter_the_sum() {
        // Known asymmetry with the weighted sum: only years feed in, via the composite.
        let low = skill_experience_composite(&dimensions(70.0, 0.0), 1.0, 1.0);
        let high = skill_experience_composite(&dimensions(70.0, 100.0), 1.0, 1.0);
        assert_eq!(low.total_score, high.total_score);
        assert_ne!(low.experience_score, high.experience_score);
    }
}
