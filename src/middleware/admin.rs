use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::database::models::Role;
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

use super::auth::AuthUser;

/// Authorization gate: requires the authenticated caller's stored role to
/// be admin. Must run after the authentication gate.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("admin gate reached without authenticated caller");
            ApiError::unauthenticated()
        })?;

    let role = users::find_role(&state.pool, &caller.email).await?;

    if role != Some(Role::Admin) {
        tracing::warn!("admin gate denied {}", caller.email);
        return Err(ApiError::forbidden());
    }

    Ok(next.run(request).await)
}
