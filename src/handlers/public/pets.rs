use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::database::models::Pet;
use crate::database::pets;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::state::AppState;

/// GET /pets - unadopted listings, newest first
pub async fn available(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = pets::list_available(&state.pool).await?;
    Ok(Json(pets))
}

#[derive(Debug, Deserialize)]
pub struct PetSearch {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /category-all-pets?category=&search= - filtered browse.
/// Category `all` applies the name search only.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<PetSearch>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = pets::search(
        &state.pool,
        query.category.as_deref(),
        query.search.as_deref(),
    )
    .await?;
    Ok(Json(pets))
}

/// GET /pet/:id - fetch a single listing
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, ApiError> {
    let id = parse_id(&id)?;
    let pet = pets::find_by_id(&state.pool, id).await?;
    Ok(Json(pet))
}
