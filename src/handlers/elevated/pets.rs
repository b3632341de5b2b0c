use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::Pet;
use crate::database::pets;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::state::AppState;

/// GET /allpets - every listing, adopted or not
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = pets::list_all(&state.pool).await?;
    Ok(Json(pets))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub id: Uuid,
    pub adopted: bool,
}

/// PATCH /update-pet-status - set the adopted flag
pub async fn set_status(
    State(state): State<AppState>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Pet>, ApiError> {
    let pet = pets::set_adopted(&state.pool, body.id, body.adopted).await?;
    Ok(Json(pet))
}

/// DELETE /pet-delete/:id - administrative removal
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    pets::delete(&state.pool, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
