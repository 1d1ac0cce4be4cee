/// Request correlation
///
/// Each request runs inside a `request` span carrying its id, so whatever the
/// handlers, services and stores log is tagged with it without the id being
/// handed around. The id is echoed back in the `x-request-id` header.
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The caller's id when it is a valid UUID, a fresh one otherwise
fn resolve_request_id(request: &Request) -> Uuid {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}

pub async fn with_request_span(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(&request);
    let span = tracing::info_span!("request", request_id = %request_id);

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
