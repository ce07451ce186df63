use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::decode::{self, DecodeError, MediaType};
use crate::errors::AppError;
use crate::extract::ParsedResume;
use crate::state::AppState;

/// Multipart field the client uploads the document under.
const UPLOAD_FIELD: &str = "resume";

/// Success envelope for the parse endpoint.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub data: ParsedResume,
    pub filename: String,
}

/// POST /api/parse-resume
///
/// Accepts one uploaded document, decodes it to text, and runs the configured
/// extraction backend. Decode problems are the only user-visible failures;
/// extraction itself always produces a record.
pub async fn parse_resume_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut upload: Option<(String, Option<String>, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or(UPLOAD_FIELD).to_string();
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Multipart(e.to_string()))?;
        upload = Some((filename, content_type, data));
        break;
    }

    let (filename, content_type, data) = upload.ok_or(AppError::MissingFile)?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(state.config.max_upload_bytes));
    }

    let media_type = MediaType::resolve(content_type.as_deref(), &filename)
        .ok_or(DecodeError::UnsupportedMediaType)?;

    info!(
        "Processing file: {filename} ({} bytes, {media_type:?})",
        data.len()
    );

    let text = decode::decode(&data, media_type)?;
    let parsed = state.extractor.extract(&text, &filename).await?;

    info!(
        "Parsing completed for {filename} via {} backend",
        state.extractor.backend()
    );

    Ok(Json(ParseResponse {
        success: true,
        data: parsed,
        filename,
    }))
}
