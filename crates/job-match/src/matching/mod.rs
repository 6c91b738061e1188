//! Applicant-to-job matching: dimension scorers, the three scoring algorithms, the
//! ensemble coordinator, and the ranking workflow that persists their results.
//!
//! Scoring itself is a pure function of a `JobRequirements`/`ApplicantData` pair; the
//! service, repository and router modules wrap it for the surrounding portal.

pub mod algorithms;
pub mod domain;
pub mod education;
pub mod ensemble;
pub mod experience;
pub mod policy;
pub mod ranking;
pub mod repository;
pub mod requirements;
pub mod router;
pub mod service;
pub mod text;

#[cfg(test)]
mod tests;

pub use domain::{
    AlgorithmUsed, ApplicantData, ApplicationId, DimensionScores, EligibilityRecord, JobId,
    JobRequirements, ScoreBreakdown,
};
pub use ensemble::{MatchingEngine, TIE_MARGIN};
pub use policy::{EducationLevel, PolicyError, ScoringPolicy};
pub use ranking::{rank_scores, PoolStatistics, RankedEntry};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatus, ApplicationStatusView,
    JobPosting, JobRepository, RankedEvaluation, RepositoryError,
};
pub use requirements::RequirementMatch;
pub use router::{ranking_router, MatchRequest};
pub use service::{RankingService, RankingServiceError, ScoreDetailView};
