use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};

/// JSON object body that never rejects
///
/// A missing, non-JSON or non-object body yields an empty object, leaving it
/// to the handler to report which required fields are missing.
#[derive(Debug, Clone, Default)]
pub struct JsonFields(pub Map<String, Value>);

impl JsonFields {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The field's value if it is a string
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The field trimmed, if it is a non-blank string
    pub fn trimmed(&self, key: &str) -> Option<&str> {
        self.str_field(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read request body");
                return Ok(Self::default());
            }
        };

        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(other) => {
                tracing::debug!(body = %other, "Request body is not a JSON object");
                Ok(Self::default())
            }
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!(error = %e, "Request body is not valid JSON");
                }
                Ok(Self::default())
            }
        }
    }
}

/// Query string parameters in request order, repeats included
///
/// Like [`JsonFields`] this never rejects: a query string that cannot be
/// decoded reads as empty.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    /// First value given for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => Ok(Self(params)),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to decode query string");
                Ok(Self::default())
            }
        }
    }
}

/// JSON truthiness: null, false, zero and empty strings, arrays or objects are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
