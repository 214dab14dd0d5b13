//! Resume Store: pluggable object storage for uploaded resumes.
//!
//! Default: `S3ResumeStore` (S3 in production, MinIO locally).
//! `AppState` holds an `Arc<dyn ResumeStore>`, chosen at startup.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

pub struct S3ResumeStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ResumeStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ResumeStore for S3ResumeStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AppError> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded resume ({size} bytes) to s3://{}/{}", self.bucket, key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 delete failed: {e}")))?;

        info!("Deleted s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

/// In-process store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryResumeStore {
    objects: std::sync::Mutex<std::collections::BTreeMap<String, Bytes>>,
}

#[cfg(test)]
impl MemoryResumeStore {
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[cfg(test)]
#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn put(&self, key: &str, body: Bytes, _content_type: &str) -> Result<(), AppError> {
        self.objects.lock().unwrap().insert(key.to_string(), body);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}

/// `resumes/{user_id}/{resume_id}/{file_name}` with path separators stripped from the name.
pub fn resume_key(user_id: &str, resume_id: Uuid, file_name: &str) -> String {
    let safe_name: String = file_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("resumes/{user_id}/{resume_id}/{safe_name}")
}
