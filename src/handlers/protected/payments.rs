use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::Payment;
use crate::database::{donations, payments};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::policy;
use crate::services::payment_intent::PaymentIntent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIntent {
    pub amount: Decimal,
}

/// POST /create-payment-intent - ask the external provider for an intent
pub async fn create_intent(
    State(state): State<AppState>,
    Extension(_caller): Extension<AuthUser>,
    Json(body): Json<CreateIntent>,
) -> Result<Json<PaymentIntent>, ApiError> {
    let intent = state.payments.create(body.amount).await?;
    Ok(Json(intent))
}

#[derive(Debug, Deserialize)]
pub struct PaymentSuccess {
    pub donation_id: Uuid,
    pub amount: Decimal,
}

/// POST /payment-success - record the payment and bump the campaign total
/// in one transaction.
pub async fn success(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<PaymentSuccess>,
) -> Result<Json<Payment>, ApiError> {
    if body.amount <= Decimal::ZERO {
        return Err(ApiError::bad_request("amount must be positive"));
    }

    let donation = donations::find_by_id(&state.pool, body.donation_id).await?;
    if donation.paused {
        return Err(ApiError::bad_request("donation campaign is paused"));
    }

    let payment =
        payments::record(&state.pool, body.donation_id, &caller.email, body.amount).await?;
    Ok(Json(payment))
}

/// GET /payment-user/:id - the caller's payments on campaign :id
pub async fn for_campaign(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let id = parse_id(&id)?;
    let payments = payments::list_by_payer_for_donation(&state.pool, id, &caller.email).await?;
    Ok(Json(payments))
}

/// GET /my-donations - all payment records made by the caller
pub async fn mine(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let payments = payments::list_by_payer(&state.pool, &caller.email).await?;
    Ok(Json(payments))
}

/// DELETE /delete-donation/:id - correction path: remove a payment record.
/// Permitted for the campaign's creator or an admin, not the payer.
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let payment = payments::find_by_id(&state.pool, id).await?;
    let donation = donations::find_by_id(&state.pool, payment.donation_id).await?;
    policy::ensure_owner_or_admin(&state.pool, &caller, &donation.creator_email).await?;

    payments::delete(&state.pool, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
