use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::auth::session::load_session;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// The caller's session, resolved from `Authorization: Bearer <token>`.
///
/// Use [`OptionalAuthUser`] for endpoints that also work anonymously.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl AuthUser {
    pub fn require_recruiter(&self) -> Result<&User, AppError> {
        if self.user.is_recruiter() {
            Ok(&self.user)
        } else {
            Err(AppError::Forbidden("Recruiter account required".to_string()))
        }
    }

    pub fn require_job_seeker(&self) -> Result<&User, AppError> {
        if self.user.is_recruiter() {
            Err(AppError::Forbidden("Job seeker account required".to_string()))
        } else {
            Ok(&self.user)
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let user = load_session(&state.redis, token)
            .await?
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}

/// A session when the request carries an `Authorization` header, `None` when it
/// carries none. A header that does not resolve to a live session is still
/// rejected (401), and session-store failures still surface (500), so callers
/// never silently fall back to an anonymous view.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }
        AuthUser::from_request_parts(parts, state)
            .await
            .map(|auth| OptionalAuthUser(Some(auth)))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn session(role: UserRole) -> AuthUser {
        AuthUser {
            user: User {
                id: "u1".to_string(),
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                role,
                company_name: None,
            },
            token: "t".to_string(),
        }
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(&headers_with("Bearer abc-123")), Some("abc-123"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("Bearer   ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_role_guards() {
        assert!(session(UserRole::Recruiter).require_recruiter().is_ok());
        assert!(session(UserRole::Recruiter).require_job_seeker().is_err());
        assert!(session(UserRole::JobSeeker).require_job_seeker().is_ok());
        assert!(matches!(
            session(UserRole::JobSeeker).require_recruiter(),
            Err(AppError::Forbidden(_))
        ));
    }
}
