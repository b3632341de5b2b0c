use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's request to adopt a listed pet. Deleted by the pet's lister
/// (rejection), never by the requester.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdoptionRequest {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub requester_email: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
