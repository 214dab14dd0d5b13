//! Resume text extraction and skill-mention detection.
//!
//! PDF extraction is CPU-bound; callers run `extract_text` inside
//! `tokio::task::spawn_blocking`.

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    Txt,
}

impl ResumeFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "docx" => Some(ResumeFormat::Docx),
            "txt" => Some(ResumeFormat::Txt),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ResumeFormat::Txt => "text/plain",
        }
    }
}

/// Plain text of the resume. `None` for formats we do not parse or unreadable PDFs.
pub fn extract_text(format: ResumeFormat, data: &[u8]) -> Option<String> {
    match format {
        ResumeFormat::Txt => Some(String::from_utf8_lossy(data).into_owned()),
        ResumeFormat::Pdf => match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("PDF text extraction failed: {e}");
                None
            }
        },
        ResumeFormat::Docx => None,
    }
}

/// Job skills that appear in the resume text, case-insensitively, in job order.
pub fn mentioned_skills(job_skills: &[String], text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    job_skills
        .iter()
        .filter(|skill| {
            let needle = skill.trim().to_lowercase();
            !needle.is_empty() && haystack.contains(&needle)
        })
        .cloned()
        .collect()
}
