use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    routes::{
        extract::{is_truthy, JsonFields},
        AppState,
    },
    services::{normalize_email, RecommendationQuery, Recommendations},
};

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    body: JsonFields,
) -> AppResult<Json<Recommendations>> {
    let query = parse_query(&body)?;

    tracing::info!(
        identified = query.email.is_some(),
        topic_count = query.topics.len(),
        "Processing recommendation request"
    );

    let recommendations = state.recommender().recommend(query).await?;
    Ok(Json(recommendations))
}

/// Reads `email` and `topics` (or a single `topic`) from the request body
fn parse_query(body: &JsonFields) -> AppResult<RecommendationQuery> {
    let email = body.str_field("email").and_then(normalize_email);

    let mut topics = body
        .get("topics")
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    if !is_truthy(&topics) {
        if let Some(topic) = body.get("topic").filter(|t| t.is_string()) {
            topics = Value::Array(vec![topic.clone()]);
        }
    }

    let Value::Array(raw_topics) = topics else {
        return Err(AppError::InvalidInput("topics must be a list".to_string()));
    };

    let video_query = raw_topics.first().map(|first| match first {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });
    let topics = raw_topics
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    Ok(RecommendationQuery {
        email,
        topics,
        video_query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> JsonFields {
        match value {
            Value::Object(map) => JsonFields(map),
            _ => JsonFields::default(),
        }
    }

    #[test]
    fn test_parse_topics_list() {
        let query = parse_query(&fields(json!({
            "email": "  Learner@Example.com ",
            "topics": ["Python", 42, "web"]
        })))
        .unwrap();
        assert_eq!(query.email.as_deref(), Some("learner@example.com"));
        assert_eq!(query.topics, vec!["Python", "web"]);
        assert_eq!(query.video_query.as_deref(), Some("Python"));
    }

    #[test]
    fn test_single_topic_fallback() {
        let query = parse_query(&fields(json!({ "topic": "data" }))).unwrap();
        assert_eq!(query.topics, vec!["data"]);
        assert_eq!(query.email, None);

        let query = parse_query(&fields(json!({ "topics": [], "topic": "react" }))).unwrap();
        assert_eq!(query.topics, vec!["react"]);
    }

    #[test]
    fn test_missing_topics_is_empty() {
        let query = parse_query(&fields(json!({}))).unwrap();
        assert!(query.topics.is_empty());
        assert!(query.video_query.is_none());
    }

    #[test]
    fn test_non_list_topics_rejected() {
        for body in [
            json!({ "topics": "python" }),
            json!({ "topics": {"a": 1} }),
            json!({ "topics": null }),
            json!({ "topics": 7, "topic": "python" }),
        ] {
            let result = parse_query(&fields(body.clone()));
            assert!(
                matches!(result, Err(AppError::InvalidInput(ref msg)) if msg == "topics must be a list"),
                "expected rejection for {}",
                body
            );
        }
    }

    #[test]
    fn test_non_string_first_topic_is_video_query() {
        let query = parse_query(&fields(json!({ "topics": [5, "python"] }))).unwrap();
        assert_eq!(query.video_query.as_deref(), Some("5"));
        assert_eq!(query.topics, vec!["python"]);
    }
}
