// Job board: recruiter postings layered over the built-in catalog.

pub mod handlers;
pub mod posting;
pub mod repository;
pub mod search;

use chrono::Utc;
use sqlx::PgPool;

use crate::catalog::{find_seed_job, seed_jobs};
use crate::errors::AppError;
use crate::models::job::Job;

/// Every visible job: recruiter postings (newest first) followed by the catalog.
pub async fn all_jobs(pool: &PgPool) -> Result<Vec<Job>, AppError> {
    let now = Utc::now();
    let mut jobs: Vec<Job> = repository::list_posted_jobs(pool)
        .await?
        .into_iter()
        .map(|row| row.into_job(now))
        .collect();
    jobs.extend(seed_jobs().iter().cloned());
    Ok(jobs)
}

/// Looks a job up by id across the catalog and recruiter postings.
pub async fn find_job(pool: &PgPool, id: &str) -> Result<Job, AppError> {
    if let Some(job) = find_seed_job(id) {
        return Ok(job.clone());
    }
    repository::find_posted_job(pool, id)
        .await?
        .map(|row| row.into_job(Utc::now()))
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
