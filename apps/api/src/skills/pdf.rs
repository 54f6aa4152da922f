//! PDF resume text extraction.

use bytes::Bytes;

use crate::errors::AppError;

/// Upload size ceiling for resumes (5 MiB).
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

pub const FILE_TOO_LARGE: &str = "File too large (max 5MB)";

/// Rejects uploads that are not named `*.pdf` or exceed the size ceiling.
pub fn validate_upload(file_name: Option<&str>, len: usize) -> Result<(), AppError> {
    let is_pdf = file_name
        .map(|n| n.trim().to_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(AppError::validation("Only PDF files are supported"));
    }
    if len > MAX_RESUME_BYTES {
        return Err(AppError::validation(FILE_TOO_LARGE));
    }
    Ok(())
}

/// Extracts plain text from PDF bytes on the blocking pool.
///
/// Malformed documents (including ones that make the parser panic) become a
/// validation error, and so does a document with no extractable text.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let text = match tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await {
        Ok(result) => result.map_err(|e| AppError::validation(format!("Failed to parse PDF: {e}")))?,
        Err(e) if e.is_panic() => {
            return Err(AppError::validation("Failed to parse PDF: malformed document"));
        }
        Err(e) => return Err(AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))),
    };

    if text.trim().is_empty() {
        return Err(AppError::validation("Could not extract text from PDF"));
    }

    Ok(text)
}
