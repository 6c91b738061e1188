use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::domain::{ApplicantData, ApplicationId, JobId, JobRequirements, ScoreBreakdown};
use super::ensemble::MatchingEngine;
use super::policy::ScoringPolicy;
use super::ranking::{rank_scores, PoolStatistics, RankedEntry};
use super::repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatus, JobPosting, JobRepository,
    RankedEvaluation, RepositoryError,
};

/// Service composing the repositories with the matching engine.
pub struct RankingService<J, R> {
    jobs: Arc<J>,
    applications: Arc<R>,
    engine: Arc<MatchingEngine>,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<J, R> RankingService<J, R>
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<R>, policy: ScoringPolicy) -> Self {
        Self {
            jobs,
            applications,
            engine: Arc::new(MatchingEngine::new(policy)),
        }
    }

    /// Register a job posting and return it with its assigned id.
    pub fn create_job(
        &self,
        requirements: JobRequirements,
    ) -> Result<JobPosting, RankingServiceError> {
        let posting = JobPosting {
            job_id: next_job_id(),
            requirements,
        };
        Ok(self.jobs.insert_job(posting)?)
    }

    /// Submit an applicant to an existing job; the application waits for the next ranking run.
    pub fn submit(
        &self,
        job_id: &JobId,
        applicant: ApplicantData,
    ) -> Result<ApplicationRecord, RankingServiceError> {
        self.jobs.fetch_job(job_id)?.ok_or(RepositoryError::NotFound)?;

        let record = ApplicationRecord {
            application_id: next_application_id(),
            job_id: job_id.clone(),
            applicant,
            status: ApplicationStatus::Pending,
            evaluation: None,
        };

        Ok(self.applications.insert(record)?)
    }

    /// Score every application for the job, rank the pool, and persist the results.
    ///
    /// The ranked records are written in a single repository call, so a failed
    /// write leaves the previous ranking state intact.
    pub fn rank_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<RankedEntry<ApplicationId>>, RankingServiceError> {
        let posting = self
            .jobs
            .fetch_job(job_id)?
            .ok_or(RepositoryError::NotFound)?;
        let records = self.applications.for_job(job_id)?;

        let applicants: Vec<ApplicantData> = records
            .iter()
            .map(|record| record.applicant.clone())
            .collect();
        let breakdowns = self.engine.score_batch(&posting.requirements, &applicants);

        let ranked = rank_scores(
            records
                .iter()
                .map(|record| record.application_id.clone())
                .zip(breakdowns)
                .collect(),
        );

        let scored_at = Utc::now();
        let mut by_id: HashMap<ApplicationId, ApplicationRecord> = records
            .into_iter()
            .map(|record| (record.application_id.clone(), record))
            .collect();

        let updated: Vec<ApplicationRecord> = ranked
            .iter()
            .filter_map(|entry| {
                by_id.remove(&entry.key).map(|mut record| {
                    record.status = ApplicationStatus::Ranked;
                    record.evaluation = Some(RankedEvaluation {
                        breakdown: entry.breakdown.clone(),
                        rank: entry.rank,
                        scored_at,
                    });
                    record
                })
            })
            .collect();
        self.applications.update_many(updated)?;

        info!(job_id = %job_id.0, pool = ranked.len(), "ranked applicants");
        Ok(ranked)
    }

    /// Stored score for one application plus statistics for its job's pool.
    pub fn detail(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ScoreDetailView, RankingServiceError> {
        let record = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let pool: Vec<f64> = self
            .applications
            .for_job(&record.job_id)?
            .iter()
            .filter_map(|peer| peer.evaluation.as_ref())
            .map(|evaluation| evaluation.breakdown.total_score)
            .collect();
        let statistics = PoolStatistics::from_scores(&pool);

        let percentile = record
            .evaluation
            .as_ref()
            .map(|evaluation| statistics.percentile_of(evaluation.breakdown.total_score));

        Ok(ScoreDetailView {
            application_id: record.application_id,
            job_id: record.job_id,
            status: record.status.label(),
            rank: record.evaluation.as_ref().map(|evaluation| evaluation.rank),
            scored_at: record.evaluation.as_ref().map(|evaluation| evaluation.scored_at),
            breakdown: record.evaluation.map(|evaluation| evaluation.breakdown),
            percentile,
            statistics,
        })
    }

    /// Score a pair without touching storage.
    pub fn preview(&self, job: &JobRequirements, applicant: &ApplicantData) -> ScoreBreakdown {
        self.engine.score(job, applicant)
    }
}

/// Detail payload combining one breakdown with pool-wide context.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetailView {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scored_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    pub statistics: PoolStatistics,
}

/// Error raised by the ranking service.
#[derive(Debug, thiserror::Error)]
pub enum RankingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
