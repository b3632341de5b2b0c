use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A donation campaign. `collected_amount` is monotonically non-decreasing
/// and only ever written by the payment recording path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: Uuid,
    pub creator_email: String,
    pub name: String,
    pub image: Option<String>,
    pub target_amount: Decimal,
    pub collected_amount: Decimal,
    pub paused: bool,
    pub last_date: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
