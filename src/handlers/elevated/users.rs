use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{Role, User};
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /allusers - every user record
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = users::list_all(&state.pool).await?;
    Ok(Json(users))
}

#[derive(Debug, Deserialize)]
pub struct RoleUpdate {
    pub id: Uuid,
    pub role: Role,
}

/// PATCH /user-role-update - set a user's stored role. This is the only
/// path that mutates roles.
pub async fn set_role(
    State(state): State<AppState>,
    Json(body): Json<RoleUpdate>,
) -> Result<Json<User>, ApiError> {
    let user = users::set_role(&state.pool, body.id, body.role).await?;
    Ok(Json(user))
}
