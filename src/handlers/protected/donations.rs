use axum::extract::State;
use axum::response::Json;
use axum::Extension;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::donations::{self, DonationChanges, NewDonation};
use crate::database::models::Donation;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::policy;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddDonation {
    pub name: String,
    pub image: Option<String>,
    pub target_amount: Decimal,
    pub last_date: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}

/// POST /add-donation - insert a campaign owned by the caller
pub async fn add(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<AddDonation>,
) -> Result<Json<Donation>, ApiError> {
    if body.target_amount <= Decimal::ZERO {
        return Err(ApiError::bad_request("target_amount must be positive"));
    }

    let donation = donations::insert(
        &state.pool,
        NewDonation {
            creator_email: caller.email,
            name: body.name,
            image: body.image,
            target_amount: body.target_amount,
            last_date: body.last_date,
            short_description: body.short_description,
            description: body.description,
        },
    )
    .await?;
    Ok(Json(donation))
}

/// GET /my-added-donation - the caller's own campaigns
pub async fn mine(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    let donations = donations::list_by_creator(&state.pool, &caller.email).await?;
    Ok(Json(donations))
}

#[derive(Debug, Deserialize)]
pub struct UpdateDonation {
    pub id: Uuid,
    pub name: Option<String>,
    pub image: Option<String>,
    pub target_amount: Option<Decimal>,
    pub last_date: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}

/// PATCH /update-donation - edit campaign fields. Owner-or-admin only.
/// `collected_amount` is not editable through this path.
pub async fn update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<UpdateDonation>,
) -> Result<Json<Donation>, ApiError> {
    if matches!(body.target_amount, Some(t) if t <= Decimal::ZERO) {
        return Err(ApiError::bad_request("target_amount must be positive"));
    }

    let donation = donations::find_by_id(&state.pool, body.id).await?;
    policy::ensure_owner_or_admin(&state.pool, &caller, &donation.creator_email).await?;

    let updated = donations::update_fields(
        &state.pool,
        body.id,
        DonationChanges {
            name: body.name,
            image: body.image,
            target_amount: body.target_amount,
            last_date: body.last_date,
            short_description: body.short_description,
            description: body.description,
        },
    )
    .await?;
    Ok(Json(updated))
}
