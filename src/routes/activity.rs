use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    routes::{
        extract::{JsonFields, QueryParams},
        AppState,
    },
    services::normalize_email,
};

/// Normalized `email` query parameter, the first one if repeated
fn required_email(params: &QueryParams) -> AppResult<String> {
    params
        .first("email")
        .and_then(normalize_email)
        .ok_or_else(|| AppError::InvalidInput("email is required".to_string()))
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub ok: bool,
    pub points: u64,
    pub completed: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub points: u64,
    pub completed: Vec<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NextTopicResponse {
    pub next: String,
}

/// Marks a resource as completed for a user
pub async fn complete(
    State(state): State<Arc<AppState>>,
    body: JsonFields,
) -> AppResult<Json<CompleteResponse>> {
    let email = body.str_field("email").and_then(normalize_email);
    let title = body.trimmed("title");
    let (Some(email), Some(title)) = (email, title) else {
        return Err(AppError::InvalidInput(
            "email and title are required".to_string(),
        ));
    };

    tracing::info!(title = %title, "Processing completion");

    let user = state.activity.record_completion(&email, title).await?;
    Ok(Json(CompleteResponse {
        ok: true,
        points: user.points,
        completed: user.completed_titles(),
    }))
}

/// Points, completions and topic history for a user
pub async fn summary(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> AppResult<Json<SummaryResponse>> {
    let email = required_email(&params)?;
    let user = state.activity.summary(&email).await?;

    Ok(Json(SummaryResponse {
        points: user.points,
        completed: user.completed_titles(),
        topics: user.topics,
    }))
}

/// Suggests the user's least practiced topic
pub async fn next_topic(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> AppResult<Json<NextTopicResponse>> {
    let email = required_email(&params)?;
    let next = state.activity.next_topic(&email).await?;
    Ok(Json(NextTopicResponse { next }))
}
