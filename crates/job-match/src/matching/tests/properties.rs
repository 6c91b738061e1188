use proptest::prelude::*;

use super::common::*;
use crate::matching::domain::EligibilityRecord;
use crate::matching::requirements::{match_skills, RequirementMatch};
use crate::matching::text::similarity;
use crate::matching::ScoringPolicy;

const SKILL_POOL: &[&str] = &[
    "Programming",
    "Database Management",
    "Project Management",
    "Technical Writing",
    "Network Administration",
    "Data Analysis",
    "Customer Service",
    "Gardening",
];

const ELIGIBILITY_POOL: &[&str] = &[
    "Civil Service Professional",
    "Civil Service Subprofessional",
    "Registered Nurse",
    "Professional Teacher",
];

fn skill_list() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(SKILL_POOL, 0..=SKILL_POOL.len())
        .prop_map(|items| items.into_iter().map(str::to_string).collect())
}

fn eligibility_list() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(ELIGIBILITY_POOL, 0..=ELIGIBILITY_POOL.len())
        .prop_map(|items| items.into_iter().map(str::to_string).collect())
}

fn shuffled_pair(
    source: impl Strategy<Value = Vec<String>>,
) -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    source.prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
}

proptest! {
    #[test]
    fn similarity_of_a_string_with_itself_is_full(text in "[A-Za-z][A-Za-z ]{0,24}") {
        let padded = format!("  {}  ", text.to_uppercase());
        prop_assert_eq!(similarity(&text, &padded), 100.0);
    }

    #[test]
    fn similarity_stays_in_bounds(a in "\\PC{0,32}", b in "\\PC{0,32}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn empty_requirements_are_always_neutral(candidates in skill_list()) {
        let result = match_skills(&[], &candidates, &ScoringPolicy::default());
        prop_assert_eq!(result, RequirementMatch { score: 50.0, matched: 0 });
    }

    #[test]
    fn unmet_requirements_score_zero(required in skill_list()) {
        prop_assume!(!required.is_empty());
        let result = match_skills(&required, &[], &ScoringPolicy::default());
        prop_assert_eq!(result.score, 0.0);
        prop_assert_eq!(result.matched, 0);
    }

    #[test]
    fn matched_counts_never_exceed_requirements(
        required in skill_list(),
        held in skill_list(),
    ) {
        let result = match_skills(&required, &held, &ScoringPolicy::default());
        prop_assert!(result.matched <= required.len());
        prop_assert!((0.0..=100.0).contains(&result.score));
    }

    #[test]
    fn list_order_does_not_change_the_result(
        (job_skills, job_skills_shuffled) in shuffled_pair(skill_list()),
        (held_skills, held_skills_shuffled) in shuffled_pair(skill_list()),
        (job_eligibilities, job_eligibilities_shuffled) in shuffled_pair(eligibility_list()),
        (held_eligibilities, held_eligibilities_shuffled) in shuffled_pair(eligibility_list()),
    ) {
        let engine = engine();

        let mut job = it_job();
        job.skills = job_skills;
        job.eligibilities = job_eligibilities;
        let mut applicant = strong_applicant();
        applicant.skills = held_skills;
        applicant.eligibilities = held_eligibilities
            .into_iter()
            .map(EligibilityRecord::new)
            .collect();

        let mut permuted_job = job.clone();
        permuted_job.skills = job_skills_shuffled;
        permuted_job.eligibilities = job_eligibilities_shuffled;
        let mut permuted_applicant = applicant.clone();
        permuted_applicant.skills = held_skills_shuffled;
        permuted_applicant.eligibilities = held_eligibilities_shuffled
            .into_iter()
            .map(EligibilityRecord::new)
            .collect();

        prop_assert_eq!(
            engine.score(&job, &applicant),
            engine.score(&permuted_job, &permuted_applicant)
        );
    }

    #[test]
    fn totals_stay_near_the_percentage_range(
        skills in skill_list(),
        years in 0.0f64..40.0,
        required_years in 0.0f64..10.0,
    ) {
        let engine = engine();
        let mut job = it_job();
        job.years_of_experience = required_years;
        let mut applicant = unrelated_applicant();
        applicant.skills = skills;
        applicant.total_years_experience = years;

        let result = engine.score(&job, &applicant);
        prop_assert!(result.total_score >= 0.0);
        prop_assert!(result.total_score <= 100.0);
        for dimension in [
            result.education_score,
            result.experience_score,
            result.skills_score,
            result.eligibility_score,
        ] {
            prop_assert!((0.0..=100.0 + 1e-9).contains(&dimension));
        }
    }
}
