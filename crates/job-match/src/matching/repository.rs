use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AlgorithmUsed, ApplicantData, ApplicationId, JobId, JobRequirements, ScoreBreakdown,
};

/// Stored job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: JobId,
    pub requirements: JobRequirements,
}

/// Lifecycle of an application with respect to ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Ranked,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Ranked => "ranked",
        }
    }
}

/// Score, rank and timestamp persisted after a ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEvaluation {
    pub breakdown: ScoreBreakdown,
    pub rank: usize,
    pub scored_at: DateTime<Utc>,
}

/// Repository record for one applicant's application to one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub applicant: ApplicantData,
    pub status: ApplicationStatus,
    pub evaluation: Option<RankedEvaluation>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            job_id: self.job_id.clone(),
            status: self.status.label(),
            total_score: self
                .evaluation
                .as_ref()
                .map(|evaluation| evaluation.breakdown.total_score),
            rank: self.evaluation.as_ref().map(|evaluation| evaluation.rank),
            algorithm_used: self
                .evaluation
                .as_ref()
                .map(|evaluation| evaluation.breakdown.algorithm_used),
        }
    }
}

/// Storage abstraction for job postings.
pub trait JobRepository: Send + Sync {
    fn insert_job(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError>;
    fn fetch_job(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError>;
}

/// Storage abstraction for applications so the service can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    /// Replace a batch of existing records. Either every record is written or none is.
    fn update_many(&self, records: Vec<ApplicationRecord>) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Compact representation of an application's ranking state.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_used: Option<AlgorithmUsed>,
}
