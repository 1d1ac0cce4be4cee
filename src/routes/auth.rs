use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    routes::extract::{is_truthy, JsonFields},
};

/// Token handed out by the demo login
pub const DEMO_TOKEN: &str = "demo-token";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: &'static str,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: Value,
}

/// Demo login: any non-empty email and password are accepted
///
/// There is no account store behind this; the returned token is fixed.
pub async fn login(body: JsonFields) -> AppResult<Json<LoginResponse>> {
    let email = body.get("email").filter(|v| is_truthy(v));
    let password = body.get("password").filter(|v| is_truthy(v));

    let (Some(email), Some(_)) = (email, password) else {
        return Err(AppError::InvalidInput(
            "Missing email or password".to_string(),
        ));
    };

    Ok(Json(LoginResponse {
        token: DEMO_TOKEN,
        user: LoginUser {
            email: email.clone(),
        },
    }))
}
