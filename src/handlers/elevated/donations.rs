use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::donations;
use crate::database::models::Donation;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::state::AppState;

/// GET /all-donation - every campaign
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Donation>>, ApiError> {
    let donations = donations::list_all(&state.pool).await?;
    Ok(Json(donations))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub id: Uuid,
    pub paused: bool,
}

/// PATCH /update-donation-status - pause or resume a campaign
pub async fn set_status(
    State(state): State<AppState>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Donation>, ApiError> {
    let donation = donations::set_paused(&state.pool, body.id, body.paused).await?;
    Ok(Json(donation))
}

/// DELETE /donation-delete/:id - administrative removal of a campaign
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    donations::delete(&state.pool, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
