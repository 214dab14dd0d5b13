use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::repository::update_company_name;
use crate::auth::session::refresh_session_user;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::{CompanyProfile, SeekerProfile};
use crate::profile::repository;
use crate::profile::skills::{clean_skill, normalize_skills};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct AddSkillResponse {
    pub added: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceSkillsRequest {
    pub skills: Vec<String>,
}

/// GET /api/v1/profile/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SkillsResponse>, AppError> {
    let user = auth.require_job_seeker()?;
    let skills = repository::get_skills(&state.db, &user.id).await?;
    Ok(Json(SkillsResponse { skills }))
}

/// POST /api/v1/profile/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<AddSkillResponse>, AppError> {
    let user = auth.require_job_seeker()?;
    let appended = match clean_skill(&req.skill) {
        Some(skill) => repository::append_skill(&state.db, &user.id, skill).await?,
        None => None,
    };
    let response = match appended {
        Some(skills) => AddSkillResponse { added: true, skills },
        None => AddSkillResponse {
            added: false,
            skills: repository::get_skills(&state.db, &user.id).await?,
        },
    };
    Ok(Json(response))
}

/// PUT /api/v1/profile/skills
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ReplaceSkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let user = auth.require_job_seeker()?;
    let skills = normalize_skills(&req.skills);
    repository::save_skills(&state.db, &user.id, &skills).await?;
    Ok(Json(SkillsResponse { skills }))
}

/// DELETE /api/v1/profile/skills/:skill
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(skill): Path<String>,
) -> Result<Json<SkillsResponse>, AppError> {
    let user = auth.require_job_seeker()?;
    let skills = repository::delete_skill(&state.db, &user.id, &skill)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Skill '{skill}' not in profile")))?;
    Ok(Json(SkillsResponse { skills }))
}

/// GET /api/v1/profile/seeker
pub async fn handle_get_seeker_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SeekerProfile>, AppError> {
    let user = auth.require_job_seeker()?;
    let profile = match repository::get_seeker_profile(&state.db, &user.id).await? {
        Some(stored) => stored.with_account_defaults(user),
        None => SeekerProfile::for_account(user),
    };
    Ok(Json(profile))
}

/// PUT /api/v1/profile/seeker
pub async fn handle_put_seeker_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(profile): Json<SeekerProfile>,
) -> Result<Json<SeekerProfile>, AppError> {
    let user = auth.require_job_seeker()?;
    if profile.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    }
    repository::save_seeker_profile(&state.db, &user.id, &profile).await?;
    Ok(Json(profile))
}

/// GET /api/v1/profile/company
pub async fn handle_get_company_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CompanyProfile>, AppError> {
    let user = auth.require_recruiter()?;
    let profile = repository::get_company_profile(&state.db, &user.id)
        .await?
        .unwrap_or_default();
    Ok(Json(profile))
}

/// PUT /api/v1/profile/company
///
/// Also renames the recruiter's company on the user record and live session.
pub async fn handle_put_company_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(profile): Json<CompanyProfile>,
) -> Result<Json<CompanyProfile>, AppError> {
    let user = auth.require_recruiter()?;
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    repository::save_company_profile(&state.db, &user.id, &profile).await?;

    if user.company_name.as_deref() != Some(profile.name.as_str()) {
        update_company_name(&state.db, &user.id, &profile.name).await?;
        let mut updated = user.clone();
        updated.company_name = Some(profile.name.clone());
        refresh_session_user(&state.redis, &auth.token, &updated).await?;
    }

    Ok(Json(profile))
}
