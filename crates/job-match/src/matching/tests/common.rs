use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::matching::domain::{
    ApplicantData, ApplicationId, EligibilityRecord, JobId, JobRequirements,
};
use crate::matching::repository::{
    ApplicationRecord, ApplicationRepository, JobPosting, JobRepository, RepositoryError,
};
use crate::matching::{MatchingEngine, RankingService, ScoringPolicy};

pub(super) const IT_DEGREE: &str = "Bachelor of Science in Information Technology";

pub(super) fn it_job() -> JobRequirements {
    JobRequirements {
        title: None,
        description: Some("Maintains agency information systems".to_string()),
        degree_requirement: IT_DEGREE.to_string(),
        eligibilities: vec!["Civil Service Professional".to_string()],
        skills: vec!["Programming".to_string(), "Database Management".to_string()],
        years_of_experience: 2.0,
    }
}

pub(super) fn strong_applicant() -> ApplicantData {
    ApplicantData {
        highest_educational_attainment: IT_DEGREE.to_string(),
        eligibilities: vec![EligibilityRecord::new("Civil Service Professional")],
        skills: vec!["Programming".to_string(), "Database Management".to_string()],
        total_years_experience: 3.0,
        work_experience_titles: None,
    }
}

pub(super) fn unrelated_applicant() -> ApplicantData {
    ApplicantData {
        highest_educational_attainment: "High School Diploma".to_string(),
        eligibilities: Vec::new(),
        skills: vec!["Gardening".to_string()],
        total_years_experience: 0.0,
        work_experience_titles: None,
    }
}

pub(super) fn open_job() -> JobRequirements {
    JobRequirements {
        title: None,
        description: None,
        degree_requirement: IT_DEGREE.to_string(),
        eligibilities: Vec::new(),
        skills: Vec::new(),
        years_of_experience: 0.0,
    }
}

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::new(ScoringPolicy::default())
}

pub(super) type MemoryService = RankingService<MemoryJobs, MemoryApplications>;

pub(super) fn build_service() -> (MemoryService, Arc<MemoryJobs>, Arc<MemoryApplications>) {
    let jobs = Arc::new(MemoryJobs::default());
    let applications = Arc::new(MemoryApplications::default());
    let service = RankingService::new(
        jobs.clone(),
        applications.clone(),
        ScoringPolicy::default(),
    );
    (service, jobs, applications)
}

#[derive(Default, Clone)]
pub(super) struct MemoryJobs {
    postings: Arc<Mutex<HashMap<JobId, JobPosting>>>,
}

impl JobRepository for MemoryJobs {
    fn insert_job(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut guard = self.postings.lock().expect("job mutex poisoned");
        if guard.contains_key(&posting.job_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(posting.job_id.clone(), posting.clone());
        Ok(posting)
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("job mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryApplications {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryApplications {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update_many(&self, records: Vec<ApplicationRecord>) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if records.iter().any(|record| !guard.contains_key(&record.application_id)) {
            return Err(RepositoryError::NotFound);
        }
        for record in records {
            guard.insert(record.application_id.clone(), record);
        }
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.job_id == job_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableApplications;

impl ApplicationRepository for UnavailableApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_many(&self, _records: Vec<ApplicationRecord>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_job(&self, _job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Accepts reads and inserts but rejects every batch update.
#[derive(Default, Clone)]
pub(super) struct RejectingUpdates {
    pub(super) inner: MemoryApplications,
}

impl ApplicationRepository for RejectingUpdates {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update_many(&self, _records: Vec<ApplicationRecord>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("write timed out".to_string()))
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        self.inner.for_job(job_id)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
