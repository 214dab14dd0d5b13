//! Axum route handlers for resume upload.

use std::future::Future;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::find_job;
use crate::matching::{calculate_skill_match, SkillMatch};
use crate::models::resume::ResumeRow;
use crate::profile::repository::get_skills;
use crate::resume::extract::{extract_text, mentioned_skills, ResumeFormat};
use crate::resume::store::{resume_key, ResumeStore};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeAnalysis {
    pub job_id: String,
    pub skill_match: SkillMatch,
    /// Job skills found in the resume text. Informational only.
    pub mentioned_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub resume: ResumeRow,
    pub extracted_chars: Option<usize>,
    pub analysis: Option<ResumeAnalysis>,
}

struct UploadForm {
    file_name: String,
    data: Bytes,
    job_id: Option<String>,
}

/// POST /api/v1/resumes
///
/// Multipart body: `file` (.pdf, .docx, .txt) and optional `job_id`.
/// With a job id, the response includes the caller's skill match for that job.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeUploadResponse>), AppError> {
    let user = auth.require_job_seeker()?;
    let form = read_upload_form(multipart).await?;

    let format = ResumeFormat::from_file_name(&form.file_name).ok_or_else(|| {
        AppError::Validation("file: Resume must be a .pdf, .docx, or .txt file".to_string())
    })?;
    if form.data.is_empty() {
        return Err(AppError::Validation("file: Resume file is empty".to_string()));
    }

    // Resolve the job before storing anything so a bad id leaves no orphan object.
    let job = match form.job_id.as_deref() {
        Some(id) => Some(find_job(&state.db, id).await?),
        None => None,
    };

    let resume_id = Uuid::new_v4();
    let key = resume_key(&user.id, resume_id, &form.file_name);
    let record = insert_resume(
        &state.db,
        NewResume {
            id: resume_id,
            user_id: &user.id,
            job_id: form.job_id.as_deref(),
            file_name: &form.file_name,
            content_type: format.content_type(),
            s3_key: &key,
            size_bytes: form.data.len() as i64,
        },
    );
    let resume = store_and_record(
        state.resumes.as_ref(),
        &key,
        form.data.clone(),
        format.content_type(),
        record,
    )
    .await?;

    let data = form.data;
    let text = tokio::task::spawn_blocking(move || extract_text(format, &data))
        .await
        .unwrap_or_else(|e| {
            warn!("Resume text extraction task failed: {e}");
            None
        });

    let analysis = match job {
        Some(job) => {
            let user_skills = get_skills(&state.db, &user.id).await?;
            Some(ResumeAnalysis {
                skill_match: calculate_skill_match(&job, &user_skills),
                mentioned_skills: text
                    .as_deref()
                    .map(|t| mentioned_skills(&job.skills, t))
                    .unwrap_or_default(),
                job_id: job.id,
            })
        }
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(ResumeUploadResponse {
            resume,
            extracted_chars: text.map(|t| t.chars().count()),
            analysis,
        }),
    ))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let resumes = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY uploaded_at DESC",
    )
    .bind(&auth.user.id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(resumes))
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let malformed = |e: axum::extract::multipart::MultipartError| {
        AppError::Validation(format!("Malformed multipart body: {e}"))
    };

    let mut file: Option<(String, Bytes)> = None;
    let mut job_id = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::Validation("file: missing file name".to_string()))?;
                let data = field.bytes().await.map_err(malformed)?;
                file = Some((file_name, data));
            }
            Some("job_id") => {
                let value = field.text().await.map_err(malformed)?;
                let value = value.trim();
                if !value.is_empty() {
                    job_id = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::Validation("file: Resume file is required".to_string()))?;
    Ok(UploadForm {
        file_name,
        data,
        job_id,
    })
}

/// Puts the object, then runs `record`. When recording fails the object is
/// removed again, so storage never holds a resume the database does not list.
async fn store_and_record<F>(
    store: &dyn ResumeStore,
    key: &str,
    data: Bytes,
    content_type: &str,
    record: F,
) -> Result<ResumeRow, AppError>
where
    F: Future<Output = Result<ResumeRow, AppError>>,
{
    store.put(key, data, content_type).await?;
    match record.await {
        Ok(row) => Ok(row),
        Err(e) => {
            if let Err(cleanup) = store.delete(key).await {
                warn!("Failed to remove orphaned resume object {key}: {cleanup}");
            }
            Err(e)
        }
    }
}

struct NewResume<'a> {
    id: Uuid,
    user_id: &'a str,
    job_id: Option<&'a str>,
    file_name: &'a str,
    content_type: &'a str,
    s3_key: &'a str,
    size_bytes: i64,
}

async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> Result<ResumeRow, AppError> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, job_id, file_name, content_type, s3_key, size_bytes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(resume.id)
    .bind(resume.user_id)
    .bind(resume.job_id)
    .bind(resume.file_name)
    .bind(resume.content_type)
    .bind(resume.s3_key)
    .bind(resume.size_bytes)
    .fetch_one(pool)
    .await?;

    info!(
        "Stored resume {} ({} bytes) for user {}",
        row.id, row.size_bytes, row.user_id
    );
    Ok(row)
}
