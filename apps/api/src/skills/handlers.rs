//! Axum route handlers for the Skills API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::skills::extraction::{extract_skills, SkillExtraction};
use crate::skills::pdf::{extract_pdf_text, validate_upload, FILE_TOO_LARGE};
use crate::state::AppState;

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// POST /skills/extract-resume
///
/// Accepts a PDF upload in the `resume` field and extracts skills from its text.
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SkillExtraction>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error("Invalid multipart body", e))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| upload_error("Failed to read upload", e))?;

        validate_upload(file_name.as_deref(), data.len())?;
        let text = extract_pdf_text(data).await?;

        let extraction = extract_skills(state.model.as_ref(), &text, &default_language()).await;
        return Ok(Json(extraction));
    }

    Err(AppError::validation("Missing 'resume' file field"))
}

/// Bodies cut off by the router's size limit report the upload ceiling.
fn upload_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::validation(FILE_TOO_LARGE)
    } else {
        AppError::validation(format!("{context}: {err}"))
    }
}

/// POST /skills/extract-skills-text
///
/// Extracts skills from manually entered text.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<SkillExtraction>, AppError> {
    let extraction = extract_skills(state.model.as_ref(), &request.text, &request.language).await;
    Ok(Json(extraction))
}
