//! Axum route handlers for the job board.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::applications::repository::list_for_recruiter;
use crate::auth::{AuthUser, OptionalAuthUser};
use crate::errors::AppError;
use crate::jobs::posting::JobPosting;
use crate::jobs::search::filter_jobs;
use crate::jobs::{all_jobs, find_job, repository};
use crate::matching::handlers::{resolve_user_skills, SkillsQuery};
use crate::matching::skill_match_scores;
use crate::models::application::ApplicationRow;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub skills: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub total: usize,
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
pub struct RecruiterJob {
    #[serde(flatten)]
    pub job: Job,
    pub applicant_count: usize,
    pub applications: Vec<ApplicationRow>,
}

/// GET /api/v1/jobs
///
/// Lists postings then catalog jobs, optionally filtered by `search`. When the
/// caller has skills (session or `?skills=`), each listing carries its match percentage.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Query(query): Query<JobListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = all_jobs(&state.db).await?;
    let jobs = filter_jobs(jobs, query.search.as_deref().unwrap_or_default());

    let scores = if query.skills.is_some() || auth.is_some() {
        let skills_query = SkillsQuery {
            skills: query.skills,
        };
        let user_skills = resolve_user_skills(&state, auth.as_ref(), &skills_query).await?;
        Some(skill_match_scores(&jobs, &user_skills))
    } else {
        None
    };

    let jobs: Vec<JobListing> = jobs
        .into_iter()
        .map(|job| JobListing {
            match_percentage: scores.as_ref().and_then(|s| s.get(&job.id).copied()),
            job,
        })
        .collect();

    Ok(Json(JobListResponse {
        total: jobs.len(),
        jobs,
    }))
}

/// POST /api/v1/jobs
pub async fn handle_post_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(posting): Json<JobPosting>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let recruiter = auth.require_recruiter()?;
    let posting = posting.validate()?;
    let row = repository::insert_job(&state.db, &recruiter.id, &posting).await?;
    Ok((StatusCode::CREATED, Json(row.into_job(Utc::now()))))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(find_job(&state.db, &job_id).await?))
}

/// GET /api/v1/recruiter/jobs
///
/// The recruiter's postings, each with its applicants.
pub async fn handle_recruiter_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<RecruiterJob>>, AppError> {
    let recruiter = auth.require_recruiter()?;
    let rows = repository::list_jobs_by_recruiter(&state.db, &recruiter.id).await?;
    let applications = list_for_recruiter(&state.db, &recruiter.id).await?;

    let now = Utc::now();
    let jobs = rows.into_iter().map(|row| row.into_job(now)).collect();
    Ok(Json(group_applications(jobs, applications)))
}

fn group_applications(jobs: Vec<Job>, applications: Vec<ApplicationRow>) -> Vec<RecruiterJob> {
    let mut by_job: HashMap<String, Vec<ApplicationRow>> = HashMap::new();
    for application in applications {
        by_job
            .entry(application.job_id.clone())
            .or_default()
            .push(application);
    }

    jobs.into_iter()
        .map(|job| {
            let applications = by_job.remove(&job.id).unwrap_or_default();
            RecruiterJob {
                applicant_count: applications.len(),
                applications,
                job,
            }
        })
        .collect()
}
