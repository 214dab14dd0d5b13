use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::jobs::posting::ValidatedPosting;
use crate::models::job::JobRow;

/// Inserts a recruiter posting and returns the stored row.
pub async fn insert_job(
    pool: &PgPool,
    posted_by: &str,
    posting: &ValidatedPosting,
) -> Result<JobRow, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (id, posted_by, title, company, location, salary, job_type, description, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&id)
    .bind(posted_by)
    .bind(&posting.title)
    .bind(&posting.company)
    .bind(&posting.location)
    .bind(&posting.salary)
    .bind(&posting.job_type)
    .bind(&posting.description)
    .bind(&posting.skills)
    .fetch_one(pool)
    .await?;

    info!("Recruiter {posted_by} posted job {id} ({})", posting.title);
    Ok(row)
}

/// All recruiter postings, newest first.
pub async fn list_posted_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY posted_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_posted_job(pool: &PgPool, id: &str) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Postings owned by one recruiter, newest first.
pub async fn list_jobs_by_recruiter(
    pool: &PgPool,
    recruiter_id: &str,
) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE posted_by = $1 ORDER BY posted_at DESC",
    )
    .bind(recruiter_id)
    .fetch_all(pool)
    .await
}
