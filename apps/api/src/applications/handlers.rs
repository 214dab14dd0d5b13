use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::applications::repository;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::find_job;
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationRow>,
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<String>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let user = auth.require_job_seeker()?;
    let job = find_job(&state.db, &job_id).await?;
    let application = repository::insert_application(&state.db, user, &job).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications
///
/// Recruiters see applications to their postings; job seekers see their own.
pub async fn handle_list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let applications = if auth.user.is_recruiter() {
        repository::list_for_recruiter(&state.db, &auth.user.id).await?
    } else {
        repository::list_for_applicant(&state.db, &auth.user.id).await?
    };
    Ok(Json(ApplicationListResponse { applications }))
}

/// GET /api/v1/jobs/:id/applications
pub async fn handle_job_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<String>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let recruiter = auth.require_recruiter()?;
    let job = find_job(&state.db, &job_id).await?;
    if job.posted_by.as_deref() != Some(recruiter.id.as_str()) {
        return Err(AppError::Forbidden(format!(
            "Job {job_id} was not posted by this recruiter"
        )));
    }
    let applications = repository::list_for_job(&state.db, &job_id).await?;
    Ok(Json(ApplicationListResponse { applications }))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<ApplicationRow>, AppError> {
    let recruiter = auth.require_recruiter()?;
    let status = ApplicationStatus::parse(&update.status).ok_or_else(|| {
        AppError::Validation(format!(
            "status must be one of pending, accepted, rejected (got '{}')",
            update.status
        ))
    })?;
    let row = repository::update_status(&state.db, application_id, &recruiter.id, status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;
    Ok(Json(row))
}
