use axum::extract::{Path, State};
use axum::response::Json;

use crate::database::models::{Donation, Payment};
use crate::database::{donations, payments};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::state::AppState;

/// GET /donation - list all campaigns
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Donation>>, ApiError> {
    let donations = donations::list_all(&state.pool).await?;
    Ok(Json(donations))
}

/// GET /donation/:id - fetch a single campaign
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Donation>, ApiError> {
    let id = parse_id(&id)?;
    let donation = donations::find_by_id(&state.pool, id).await?;
    Ok(Json(donation))
}

/// GET /collect-donation/:id - payment records for a campaign
pub async fn collected(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let id = parse_id(&id)?;
    // 404 for an unknown campaign rather than an empty list
    donations::find_by_id(&state.pool, id).await?;
    let payments = payments::list_for_donation(&state.pool, id).await?;
    Ok(Json(payments))
}
