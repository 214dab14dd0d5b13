use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: String,
    pub job_id: Option<String>,
    pub file_name: String,
    pub content_type: String,
    pub s3_key: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}
