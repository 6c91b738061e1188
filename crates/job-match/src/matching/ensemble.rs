use rayon::prelude::*;
use tracing::debug;

use super::algorithms::{
    eligibility_education_tie_breaker, skill_experience_composite, weighted_sum,
};
use super::domain::{
    round2, AlgorithmUsed, ApplicantData, DimensionScores, JobRequirements, ScoreBreakdown,
};
use super::education::score_education;
use super::experience::score_experience;
use super::policy::ScoringPolicy;
use super::requirements::{eligibility_waived, match_eligibilities, match_skills};

/// Totals within this margin are treated as a near-tie.
pub const TIE_MARGIN: f64 = 5.0;
const PRIMARY_WEIGHT: f64 = 0.6;
const SECONDARY_WEIGHT: f64 = 0.4;

/// Stateless scorer applying a scoring policy to job/applicant pairs.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    policy: ScoringPolicy,
}

impl MatchingEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Per-dimension scores shared by every algorithm.
    pub fn dimensions(&self, job: &JobRequirements, applicant: &ApplicantData) -> DimensionScores {
        let skills = match_skills(&job.skills, &applicant.skills, &self.policy);
        let eligibilities =
            match_eligibilities(&job.eligibilities, &applicant.eligibility_titles(), &self.policy);

        DimensionScores {
            education: score_education(
                &job.degree_requirement,
                &applicant.highest_educational_attainment,
                &self.policy,
            ),
            experience: score_experience(job, applicant, &self.policy),
            skills: skills.score,
            eligibility: eligibilities.score,
            matched_skills: skills.matched,
            matched_eligibilities: eligibilities.matched,
            eligibility_waived: eligibility_waived(&job.eligibilities, &self.policy),
        }
    }

    pub fn weighted_sum(&self, job: &JobRequirements, applicant: &ApplicantData) -> ScoreBreakdown {
        weighted_sum(&self.dimensions(job, applicant))
    }

    pub fn skill_experience_composite(
        &self,
        job: &JobRequirements,
        applicant: &ApplicantData,
    ) -> ScoreBreakdown {
        skill_experience_composite(
            &self.dimensions(job, applicant),
            applicant.total_years_experience,
            job.years_of_experience,
        )
    }

    pub fn tie_breaker(&self, job: &JobRequirements, applicant: &ApplicantData) -> ScoreBreakdown {
        eligibility_education_tie_breaker(&self.dimensions(job, applicant))
    }

    /// Ensemble score for one applicant against one job.
    pub fn score(&self, job: &JobRequirements, applicant: &ApplicantData) -> ScoreBreakdown {
        let dimensions = self.dimensions(job, applicant);
        coordinate(
            &dimensions,
            applicant.total_years_experience,
            job.years_of_experience,
        )
    }

    /// Score a pool of applicants for one job; output order follows input order.
    pub fn score_batch(
        &self,
        job: &JobRequirements,
        applicants: &[ApplicantData],
    ) -> Vec<ScoreBreakdown> {
        applicants
            .par_iter()
            .map(|applicant| self.score(job, applicant))
            .collect()
    }
}

fn coordinate(
    dimensions: &DimensionScores,
    applicant_years: f64,
    required_years: f64,
) -> ScoreBreakdown {
    let primary = weighted_sum(dimensions);
    let secondary = skill_experience_composite(dimensions, applicant_years, required_years);
    let gap = (primary.total_score - secondary.total_score).abs();

    if gap <= TIE_MARGIN {
        debug!(
            primary = primary.total_score,
            secondary = secondary.total_score,
            "near-tie between primary algorithms, applying tie-breaker"
        );
        let resolved = eligibility_education_tie_breaker(dimensions);
        return ScoreBreakdown {
            algorithm_used: AlgorithmUsed::EnsembleTieBreaker,
            reasoning: format!(
                "Near-tie between {} ({:.2}) and {} ({:.2}); \
                 resolved by eligibility-education priority. {}",
                primary.algorithm_used,
                primary.total_score,
                secondary.algorithm_used,
                secondary.total_score,
                resolved.reasoning
            ),
            ..resolved
        };
    }

    debug!(
        primary = primary.total_score,
        secondary = secondary.total_score,
        "blending primary algorithms"
    );
    blend(&primary, &secondary)
}

fn blend(primary: &ScoreBreakdown, secondary: &ScoreBreakdown) -> ScoreBreakdown {
    let mix = |a: f64, b: f64| PRIMARY_WEIGHT * a + SECONDARY_WEIGHT * b;

    let education = mix(primary.education_score, secondary.education_score);
    let experience = mix(primary.experience_score, secondary.experience_score);
    let skills = mix(primary.skills_score, secondary.skills_score);
    let eligibility = mix(primary.eligibility_score, secondary.eligibility_score);
    let total = round2(mix(primary.total_score, secondary.total_score));

    let reasoning = format!(
        "Multi-factor assessment blending {} ({:.2}) and {} ({:.2}). {}",
        primary.algorithm_used,
        primary.total_score,
        secondary.algorithm_used,
        secondary.total_score,
        narrative(education, experience, skills, eligibility)
    );

    ScoreBreakdown {
        education_score: education,
        experience_score: experience,
        skills_score: skills,
        eligibility_score: eligibility,
        total_score: total,
        algorithm_used: AlgorithmUsed::MultiFactorAssessment,
        reasoning,
        matched_skills_count: primary.matched_skills_count,
        matched_eligibilities_count: primary.matched_eligibilities_count,
    }
}

struct Threshold {
    strong: f64,
    weak: f64,
    strength: &'static str,
    gap: &'static str,
}

const THRESHOLDS: [Threshold; 4] = [
    Threshold {
        strong: 80.0,
        weak: 60.0,
        strength: "strong educational background",
        gap: "education below requirement",
    },
    Threshold {
        strong: 80.0,
        weak: 60.0,
        strength: "relevant work experience",
        gap: "limited relevant experience",
    },
    Threshold {
        strong: 60.0,
        weak: 40.0,
        strength: "solid skill match",
        gap: "few required skills demonstrated",
    },
    Threshold {
        strong: 80.0,
        weak: 60.0,
        strength: "required eligibility held",
        gap: "missing required eligibility",
    },
];

fn narrative(education: f64, experience: f64, skills: f64, eligibility: f64) -> String {
    let scores = [education, experience, skills, eligibility];
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();

    for (score, threshold) in scores.iter().zip(THRESHOLDS.iter()) {
        if *score >= threshold.strong {
            strengths.push(threshold.strength);
        } else if *score < threshold.weak {
            gaps.push(threshold.gap);
        }
    }

    let mut sentences = Vec::new();
    if !strengths.is_empty() {
        sentences.push(format!("Strengths: {}.", strengths.join(", ")));
    }
    if !gaps.is_empty() {
        sentences.push(format!("Gaps: {}.", gaps.join(", ")));
    }
    if sentences.is_empty() {
        sentences.push("Moderate fit across all criteria.".to_string());
    }
    sentences.join(" ")
}
