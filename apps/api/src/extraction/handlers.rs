//! Axum route handlers for the resume upload API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::pipeline::extract_skills;
use crate::pdf;
use crate::state::AppState;
use crate::storage;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_url: String,
    pub rule_based_skills: Vec<String>,
    pub llm_skills: Vec<String>,
    pub all_skills: Vec<String>,
}

/// POST /api/v1/resumes
///
/// Full upload pipeline: store the PDF → extract text → extract skills
/// (phrase matcher + LLM) → return all three skill views.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Input(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Input(format!("failed to read uploaded file: {e}")))?;
            file = Some((filename, data));
        }
    }

    let Some((filename, data)) = file else {
        return Err(AppError::Input("No file uploaded".to_string()));
    };

    info!(filename = %filename, size = data.len(), "resume upload received");

    let key = format!("pdfs/{}_{}", Uuid::new_v4(), filename);
    let file_url = storage::upload_pdf(
        &state.s3,
        &state.config.s3_bucket,
        &state.config.s3_endpoint,
        &key,
        data.clone(),
    )
    .await?;

    let text = pdf::extract_text(&data)?;
    if text.trim().is_empty() {
        return Err(AppError::Input("No text extracted from PDF".to_string()));
    }
    info!(chars = text.len(), "extracted resume text");

    let result = extract_skills(state.rule_source.as_ref(), state.llm_source.as_ref(), &text).await?;

    Ok(Json(UploadResponse {
        message: "Skills extracted successfully".to_string(),
        file_url,
        rule_based_skills: result.rule_based_skills,
        llm_skills: result.llm_skills,
        all_skills: result.all_skills,
    }))
}
