use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::auth::repository::{find_or_insert_user, insert_user};
use crate::auth::session::{create_session, delete_session};
use crate::auth::validation::{LoginRequest, SignupRequest};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let user = req.into_user()?;
    insert_user(&state.db, &user).await?;
    let response = open_session(&state, user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Returns the stored account for the email and role, so postings,
/// applications and skills carry over between logins.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let candidate = req.into_user()?;
    let user = find_or_insert_user(&state.db, &candidate).await?;
    Ok(Json(open_session(&state, user).await?))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, AppError> {
    delete_session(&state.redis, &auth.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

async fn open_session(state: &AppState, user: User) -> Result<AuthResponse, AppError> {
    let token = create_session(&state.redis, &user, state.config.session_ttl_secs).await?;
    Ok(AuthResponse { token, user })
}
