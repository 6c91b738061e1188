use super::domain::{ApplicantData, JobRequirements};
use super::policy::ScoringPolicy;
use super::text::{normalize_tokens, similarity, token_overlap};

const YEARS_WEIGHT: f64 = 0.7;
const RELEVANCE_WEIGHT: f64 = 0.3;
const SURPLUS_YEARS_BONUS: f64 = 10.0;
const TITLE_OVERLAP_WEIGHT: f64 = 80.0;
const NEUTRAL_RELEVANCE: f64 = 50.0;

/// Required years with zero treated as one so ratios stay finite.
pub(crate) fn effective_required_years(required: f64) -> f64 {
    required.max(1.0)
}

pub fn years_score(applicant_years: f64, required_years: f64) -> f64 {
    let ratio = applicant_years / effective_required_years(required_years);
    let score = (ratio * 100.0).min(100.0);
    if applicant_years > required_years {
        (score + SURPLUS_YEARS_BONUS).min(100.0)
    } else {
        score
    }
}

/// Best similarity between the job title and any past title, neutral when either side is missing.
pub fn title_relevance(
    job_title: Option<&str>,
    past_titles: Option<&[String]>,
    policy: &ScoringPolicy,
) -> f64 {
    let job_title = match job_title.map(str::trim) {
        Some(title) if !title.is_empty() => title,
        _ => return NEUTRAL_RELEVANCE,
    };
    let past_titles: Vec<&str> = past_titles
        .unwrap_or_default()
        .iter()
        .map(|title| title.trim())
        .filter(|title| !title.is_empty())
        .collect();
    if past_titles.is_empty() {
        return NEUTRAL_RELEVANCE;
    }

    let job_tokens = normalize_tokens(job_title, policy);

    past_titles
        .into_iter()
        .map(|title| {
            let direct = similarity(job_title, title);
            let overlap =
                token_overlap(&job_tokens, &normalize_tokens(title, policy)) * TITLE_OVERLAP_WEIGHT;
            direct.max(overlap)
        })
        .fold(0.0, f64::max)
}

pub fn score_experience(
    job: &JobRequirements,
    applicant: &ApplicantData,
    policy: &ScoringPolicy,
) -> f64 {
    let years = years_score(applicant.total_years_experience, job.years_of_experience);
    let relevance = title_relevance(
        job.title.as_deref(),
        applicant.work_experience_titles.as_deref(),
        policy,
    );
    YEARS_WEIGHT * years + RELEVANCE_WEIGHT * relevance
}
