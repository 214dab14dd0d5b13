use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job listing as served to clients: either a built-in catalog job or a
/// recruiter-posted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub posted_days: i64,
    /// Required skills in listing order. Case-sensitive, duplicates allowed.
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: String,
    pub posted_by: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

impl JobRow {
    pub fn into_job(self, now: DateTime<Utc>) -> Job {
        Job {
            posted_days: (now - self.posted_at).num_days().max(0),
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            description: self.description,
            skills: self.skills,
            posted_by: Some(self.posted_by),
            posted_at: Some(self.posted_at),
        }
    }
}
