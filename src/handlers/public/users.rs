use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::database::models::User;
use crate::database::users::{self, NewUser};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddUser {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// POST /add-user - upsert-by-email. A second call with the same email
/// returns the original record unchanged.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddUser>,
) -> Result<Json<User>, ApiError> {
    if body.email.trim().is_empty() {
        return Err(ApiError::bad_request("email is required"));
    }

    let user = users::upsert_by_email(
        &state.pool,
        NewUser {
            email: body.email,
            name: body.name,
            image: body.image,
        },
    )
    .await?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub email: String,
}

/// GET /user?email= - fetch a user record by email
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<User>, ApiError> {
    let user = users::find_by_email(&state.pool, &query.email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user {} not found", query.email)))?;
    Ok(Json(user))
}
