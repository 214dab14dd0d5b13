//! Axum route handlers for skill matching and learning-resource recommendations.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthUser, OptionalAuthUser};
use crate::catalog::{recommended_resources_for_job, LearningResource};
use crate::errors::AppError;
use crate::jobs::posting::parse_skill_list;
use crate::jobs::{all_jobs, find_job};
use crate::matching::{calculate_skill_match, match_skills, skill_match_scores, SkillMatch};
use crate::profile::repository::get_skills;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `?skills=React,CSS` overrides the caller's stored skills.
#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    pub skills: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdHocMatchRequest {
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub user_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoresRequest {
    pub user_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub scores: HashMap<String, u32>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchResponse {
    pub job_id: String,
    #[serde(flatten)]
    pub skill_match: SkillMatch,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub job_id: String,
    pub missing: Vec<String>,
    pub resources: Vec<LearningResource>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Matches an arbitrary skill list without touching stored jobs or profiles.
pub async fn handle_match(Json(req): Json<AdHocMatchRequest>) -> Json<SkillMatch> {
    Json(match_skills(&req.job_skills, &req.user_skills))
}

/// POST /api/v1/match/scores
///
/// Match percentage for every visible job, keyed by job id.
pub async fn handle_match_scores(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Json(req): Json<ScoresRequest>,
) -> Result<Json<ScoresResponse>, AppError> {
    let user_skills = match req.user_skills {
        Some(skills) => skills,
        None => stored_skills(&state, auth.as_ref()).await?,
    };
    let jobs = all_jobs(&state.db).await?;
    Ok(Json(ScoresResponse {
        scores: skill_match_scores(&jobs, &user_skills),
    }))
}

/// GET /api/v1/jobs/:id/match
pub async fn handle_job_match(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Path(job_id): Path<String>,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let job = find_job(&state.db, &job_id).await?;
    let user_skills = resolve_user_skills(&state, auth.as_ref(), &query).await?;
    Ok(Json(JobMatchResponse {
        job_id: job.id.clone(),
        skill_match: calculate_skill_match(&job, &user_skills),
    }))
}

/// GET /api/v1/jobs/:id/resources
///
/// Learning resources that teach the skills the caller is missing for this job.
pub async fn handle_job_resources(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Path(job_id): Path<String>,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let job = find_job(&state.db, &job_id).await?;
    let user_skills = resolve_user_skills(&state, auth.as_ref(), &query).await?;
    let missing = calculate_skill_match(&job, &user_skills).missing;
    let resources = recommended_resources_for_job(&job, &user_skills);
    Ok(Json(RecommendationsResponse {
        job_id: job.id,
        missing,
        resources,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Skill resolution
// ────────────────────────────────────────────────────────────────────────────

/// Explicit `?skills=` wins; otherwise the session's stored skills; otherwise none.
pub async fn resolve_user_skills(
    state: &AppState,
    auth: Option<&AuthUser>,
    query: &SkillsQuery,
) -> Result<Vec<String>, AppError> {
    match query.skills.as_deref() {
        Some(raw) => Ok(parse_skill_list(raw)),
        None => stored_skills(state, auth).await,
    }
}

async fn stored_skills(state: &AppState, auth: Option<&AuthUser>) -> Result<Vec<String>, AppError> {
    match auth {
        Some(auth) if !auth.user.is_recruiter() => Ok(get_skills(&state.db, &auth.user.id).await?),
        _ => Ok(Vec::new()),
    }
}
