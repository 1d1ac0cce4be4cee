use axum::Json;
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    routes::extract::JsonFields,
    services::summarizer,
};

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Extractive summary of the submitted text
pub async fn summarize(body: JsonFields) -> AppResult<Json<SummarizeResponse>> {
    let text = body
        .trimmed("text")
        .ok_or_else(|| AppError::InvalidInput("text is required".to_string()))?;

    Ok(Json(SummarizeResponse {
        summary: summarizer::summarize(text),
    }))
}
