use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{error::AppResult, models::PopularResource, routes::AppState};

#[derive(Debug, Serialize)]
pub struct PopularResponse {
    pub popular: Vec<PopularResource>,
}

/// Completion counts per resource across all users
pub async fn popular(State(state): State<Arc<AppState>>) -> AppResult<Json<PopularResponse>> {
    let popular = state.activity.popular_resources().await?;
    Ok(Json(PopularResponse { popular }))
}
