use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Requirements advertised by a job posting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub title: Option<String>,
    /// Informational only; never consulted while scoring.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub degree_requirement: String,
    #[serde(default)]
    pub eligibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_of_experience: f64,
}

/// License or civil-service qualification held by an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRecord {
    pub title: String,
}

impl EligibilityRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Applicant profile as supplied by the calling layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicantData {
    #[serde(default)]
    pub highest_educational_attainment: String,
    #[serde(default)]
    pub eligibilities: Vec<EligibilityRecord>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub total_years_experience: f64,
    #[serde(default)]
    pub work_experience_titles: Option<Vec<String>>,
}

impl ApplicantData {
    pub(crate) fn eligibility_titles(&self) -> Vec<String> {
        self.eligibilities
            .iter()
            .map(|record| record.title.clone())
            .collect()
    }
}

/// Path through the engine that produced a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmUsed {
    #[serde(rename = "Weighted Sum")]
    WeightedSum,
    #[serde(rename = "Skill-Experience Composite")]
    SkillExperienceComposite,
    #[serde(rename = "Eligibility-Education Tie-breaker")]
    EligibilityEducationTieBreaker,
    #[serde(rename = "Ensemble (Tie-breaker)")]
    EnsembleTieBreaker,
    #[serde(rename = "Multi-Factor Assessment")]
    MultiFactorAssessment,
}

impl AlgorithmUsed {
    pub const fn label(self) -> &'static str {
        match self {
            AlgorithmUsed::WeightedSum => "Weighted Sum",
            AlgorithmUsed::SkillExperienceComposite => "Skill-Experience Composite",
            AlgorithmUsed::EligibilityEducationTieBreaker => "Eligibility-Education Tie-breaker",
            AlgorithmUsed::EnsembleTieBreaker => "Ensemble (Tie-breaker)",
            AlgorithmUsed::MultiFactorAssessment => "Multi-Factor Assessment",
        }
    }
}

impl std::fmt::Display for AlgorithmUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The four per-dimension scores every algorithm consumes, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub eligibility: f64,
    pub matched_skills: usize,
    pub matched_eligibilities: usize,
    /// True when the job requires no eligibility (empty list or sentinel entries only).
    pub eligibility_waived: bool,
}

/// Explainable scoring result for a single job/applicant pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub education_score: f64,
    pub experience_score: f64,
    pub skills_score: f64,
    pub eligibility_score: f64,
    pub total_score: f64,
    pub algorithm_used: AlgorithmUsed,
    pub reasoning: String,
    pub matched_skills_count: usize,
    pub matched_eligibilities_count: usize,
}

impl ScoreBreakdown {
    pub(crate) fn from_dimensions(
        dimensions: &DimensionScores,
        total_score: f64,
        algorithm_used: AlgorithmUsed,
        reasoning: String,
    ) -> Self {
        Self {
            education_score: dimensions.education,
            experience_score: dimensions.experience,
            skills_score: dimensions.skills,
            eligibility_score: dimensions.eligibility,
            total_score: round2(total_score),
            algorithm_used,
            reasoning,
            matched_skills_count: dimensions.matched_skills,
            matched_eligibilities_count: dimensions.matched_eligibilities,
        }
    }
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
