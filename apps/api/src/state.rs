use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::config::Config;
use crate::resume::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Session store. Connections are opened per request from the client.
    pub redis: RedisClient,
    /// Pluggable resume storage. Default: S3ResumeStore.
    pub resumes: Arc<dyn ResumeStore>,
    pub config: Config,
}
