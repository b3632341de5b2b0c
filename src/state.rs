use sqlx::PgPool;

use crate::services::payment_intent::PaymentIntentClient;

/// Shared handler dependencies, injected through axum state rather than
/// captured from module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub payments: PaymentIntentClient,
}
