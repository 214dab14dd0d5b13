use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::Job;
use crate::models::user::User;

/// Records an application. A second application to the same job by the same
/// user is a conflict.
pub async fn insert_application(
    pool: &PgPool,
    user: &User,
    job: &Job,
) -> Result<ApplicationRow, AppError> {
    let result = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (id, user_id, user_name, job_id, job_title, company, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&user.id)
    .bind(&user.name)
    .bind(&job.id)
    .bind(&job.title)
    .bind(&job.company)
    .bind(ApplicationStatus::Pending.as_str())
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => {
            info!("User {} applied to job {} ({})", user.id, job.id, job.title);
            Ok(row)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
            "You have already applied for this job".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Applications submitted by one job seeker, newest first.
pub async fn list_for_applicant(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE user_id = $1 ORDER BY applied_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Applications to any job posted by `recruiter_id`, newest first.
pub async fn list_for_recruiter(
    pool: &PgPool,
    recruiter_id: &str,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        SELECT a.*
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        WHERE j.posted_by = $1
        ORDER BY a.applied_at DESC
        "#,
    )
    .bind(recruiter_id)
    .fetch_all(pool)
    .await
}

pub async fn list_for_job(pool: &PgPool, job_id: &str) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE job_id = $1 ORDER BY applied_at DESC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

/// Sets the status of an application to one of the recruiter's jobs.
/// `None` when the application does not exist or belongs to another recruiter's job.
pub async fn update_status(
    pool: &PgPool,
    application_id: Uuid,
    recruiter_id: &str,
    status: ApplicationStatus,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications a
        SET status = $1
        FROM jobs j
        WHERE a.id = $2 AND j.id = a.job_id AND j.posted_by = $3
        RETURNING a.*
        "#,
    )
    .bind(status.as_str())
    .bind(application_id)
    .bind(recruiter_id)
    .fetch_optional(pool)
    .await?;

    if row.is_some() {
        info!("Application {application_id} set to {}", status.as_str());
    }
    Ok(row)
}
