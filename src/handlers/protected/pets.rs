use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::Pet;
use crate::database::pets::{self, NewPet, PetChanges};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::policy;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPet {
    pub name: String,
    pub age: Option<i32>,
    pub category: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// POST /add-pet - insert a listing owned by the caller
pub async fn add(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<AddPet>,
) -> Result<Json<Pet>, ApiError> {
    let pet = pets::insert(
        &state.pool,
        NewPet {
            lister_email: caller.email,
            name: body.name,
            age: body.age,
            category: body.category,
            location: body.location,
            description: body.description,
            image: body.image,
        },
    )
    .await?;
    Ok(Json(pet))
}

/// GET /my-pets - the caller's own listings
pub async fn mine(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = pets::list_by_lister(&state.pool, &caller.email).await?;
    Ok(Json(pets))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePet {
    pub id: Uuid,
    pub adopted: Option<bool>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// PATCH /update-pet - edit fields or flip adoption status.
/// Owner-or-admin only.
pub async fn update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<UpdatePet>,
) -> Result<Json<Pet>, ApiError> {
    let pet = pets::find_by_id(&state.pool, body.id).await?;
    policy::ensure_owner_or_admin(&state.pool, &caller, &pet.lister_email).await?;

    let updated = if let Some(adopted) = body.adopted {
        pets::set_adopted(&state.pool, body.id, adopted).await?
    } else {
        pets::update_fields(
            &state.pool,
            body.id,
            PetChanges {
                name: body.name,
                age: body.age,
                category: body.category,
                location: body.location,
                description: body.description,
                image: body.image,
            },
        )
        .await?
    };
    Ok(Json(updated))
}

/// DELETE /delete-pet/:id - owner-or-admin only
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let pet = pets::find_by_id(&state.pool, id).await?;
    policy::ensure_owner_or_admin(&state.pool, &caller, &pet.lister_email).await?;

    pets::delete(&state.pool, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
