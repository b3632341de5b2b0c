use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded payment against a donation campaign. Append-only from the
/// caller's perspective; deletion is a creator/admin correction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub payer_email: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}
