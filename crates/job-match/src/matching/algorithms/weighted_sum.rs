use crate::matching::domain::{AlgorithmUsed, DimensionScores, ScoreBreakdown};

pub(crate) const EDUCATION_WEIGHT: f64 = 0.30;
pub(crate) const EXPERIENCE_WEIGHT: f64 = 0.25;
pub(crate) const SKILLS_WEIGHT: f64 = 0.25;
pub(crate) const ELIGIBILITY_WEIGHT: f64 = 0.20;

/// Linear blend of the four dimensions with fixed policy weights.
pub fn weighted_sum(dimensions: &DimensionScores) -> ScoreBreakdown {
    let contributions = [
        ("Education", dimensions.education, EDUCATION_WEIGHT),
        ("Experience", dimensions.experience, EXPERIENCE_WEIGHT),
        ("Skills", dimensions.skills, SKILLS_WEIGHT),
        ("Eligibility", dimensions.eligibility, ELIGIBILITY_WEIGHT),
    ];

    let total: f64 = contributions
        .iter()
        .map(|(_, score, weight)| score * weight)
        .sum();

    let itemised: Vec<String> = contributions
        .iter()
        .map(|(name, score, weight)| {
            format!(
                "{name} {score:.2} x {weight:.2} = {:.2}",
                score * weight
            )
        })
        .collect();

    let reasoning = format!(
        "Weighted sum: {}. Total {:.2}.",
        itemised.join("; "),
        total
    );

    ScoreBreakdown::from_dimensions(dimensions, total, AlgorithmUsed::WeightedSum, reasoning)
}
