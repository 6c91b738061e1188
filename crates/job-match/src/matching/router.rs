use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{ApplicantData, ApplicationId, JobId, JobRequirements};
use super::repository::{ApplicationRepository, JobRepository, RepositoryError};
use super::service::{RankingService, RankingServiceError};

/// Body accepted by the stateless scoring endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub job: JobRequirements,
    pub applicant: ApplicantData,
}

/// Router builder exposing job intake, ranking and score lookups.
pub fn ranking_router<J, R>(service: Arc<RankingService<J, R>>) -> Router
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", post(create_job_handler::<J, R>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(submit_handler::<J, R>),
        )
        .route(
            "/api/v1/jobs/:job_id/rankings",
            post(rank_handler::<J, R>),
        )
        .route(
            "/api/v1/applications/:application_id/score",
            get(detail_handler::<J, R>),
        )
        .route("/api/v1/match", post(match_handler::<J, R>))
        .with_state(service)
}

pub(crate) async fn create_job_handler<J, R>(
    State(service): State<Arc<RankingService<J, R>>>,
    axum::Json(requirements): axum::Json<JobRequirements>,
) -> Response
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    match service.create_job(requirements) {
        Ok(posting) => (StatusCode::CREATED, axum::Json(posting)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<J, R>(
    State(service): State<Arc<RankingService<J, R>>>,
    Path(job_id): Path<String>,
    axum::Json(applicant): axum::Json<ApplicantData>,
) -> Response
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    match service.submit(&JobId(job_id), applicant) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rank_handler<J, R>(
    State(service): State<Arc<RankingService<J, R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    let job_id = JobId(job_id);
    let outcome = tokio::task::spawn_blocking(move || service.rank_job(&job_id)).await;
    match outcome {
        Ok(Ok(ranked)) => (StatusCode::OK, axum::Json(ranked)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(join_error) => {
            error!(error = %join_error, "ranking task did not complete");
            let payload = json!({ "error": "ranking task did not complete" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_handler<J, R>(
    State(service): State<Arc<RankingService<J, R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    match service.detail(&ApplicationId(application_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn match_handler<J, R>(
    State(service): State<Arc<RankingService<J, R>>>,
    axum::Json(request): axum::Json<MatchRequest>,
) -> Response
where
    J: JobRepository + 'static,
    R: ApplicationRepository + 'static,
{
    let breakdown = service.preview(&request.job, &request.applicant);
    (StatusCode::OK, axum::Json(breakdown)).into_response()
}

fn error_response(error: RankingServiceError) -> Response {
    let status = match &error {
        RankingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        RankingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        RankingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
