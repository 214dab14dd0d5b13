pub mod health;
pub mod resources;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::auth::handlers as auth;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_post_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/jobs/:id/match", get(matching::handle_job_match))
        .route(
            "/api/v1/jobs/:id/resources",
            get(matching::handle_job_resources),
        )
        .route("/api/v1/jobs/:id/apply", post(applications::handle_apply))
        .route(
            "/api/v1/jobs/:id/applications",
            get(applications::handle_job_applications),
        )
        .route("/api/v1/recruiter/jobs", get(jobs::handle_recruiter_jobs))
        // Matching
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/match/scores", post(matching::handle_match_scores))
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        // Profile
        .route(
            "/api/v1/profile/skills",
            get(profile::handle_get_skills)
                .post(profile::handle_add_skill)
                .put(profile::handle_replace_skills),
        )
        .route(
            "/api/v1/profile/skills/:skill",
            delete(profile::handle_remove_skill),
        )
        .route(
            "/api/v1/profile/seeker",
            get(profile::handle_get_seeker_profile).put(profile::handle_put_seeker_profile),
        )
        .route(
            "/api/v1/profile/company",
            get(profile::handle_get_company_profile).put(profile::handle_put_company_profile),
        )
        // Learning resources
        .route("/api/v1/resources", get(resources::handle_list_resources))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resume::handle_list_resumes)
                .post(resume::handle_upload_resume)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
