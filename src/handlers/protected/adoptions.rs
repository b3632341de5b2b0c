use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::adoptions::{self, NewAdoptionRequest};
use crate::database::models::AdoptionRequest;
use crate::database::pets;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::policy;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Adopt {
    pub pet_id: Uuid,
    pub message: Option<String>,
}

/// POST /adopt - express interest in a listed pet
pub async fn adopt(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<Adopt>,
) -> Result<Json<AdoptionRequest>, ApiError> {
    let pet = pets::find_by_id(&state.pool, body.pet_id).await?;
    if pet.adopted {
        return Err(ApiError::bad_request("pet has already been adopted"));
    }

    let request = adoptions::insert(
        &state.pool,
        NewAdoptionRequest {
            pet_id: body.pet_id,
            requester_email: caller.email,
            message: body.message,
        },
    )
    .await?;
    Ok(Json(request))
}

/// GET /adoption-request - requests against the caller's own listings
pub async fn incoming(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<AdoptionRequest>>, ApiError> {
    let requests = adoptions::list_for_lister(&state.pool, &caller.email).await?;
    Ok(Json(requests))
}

/// DELETE /reject-adoption-request/:id - the pet's lister (or an admin)
/// rejects a request. The requester cannot delete it themselves.
pub async fn reject(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let request = adoptions::find_by_id(&state.pool, id).await?;
    let pet = pets::find_by_id(&state.pool, request.pet_id).await?;
    policy::ensure_owner_or_admin(&state.pool, &caller, &pet.lister_email).await?;

    adoptions::delete(&state.pool, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
