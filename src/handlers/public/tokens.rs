use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

/// POST /jwt - issue a bearer token for the given identity
pub async fn issue(Json(body): Json<TokenRequest>) -> Result<Json<Value>, ApiError> {
    if body.email.trim().is_empty() {
        return Err(ApiError::bad_request("email is required"));
    }

    let token = auth::issue_token(&body.email)?;
    Ok(Json(json!({ "token": token })))
}
