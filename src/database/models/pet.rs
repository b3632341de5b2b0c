use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A pet listed for adoption. `lister_email` is the owner for the
/// ownership policy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: Uuid,
    pub lister_email: String,
    pub name: String,
    pub age: Option<i32>,
    pub category: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub adopted: bool,
    pub created_at: DateTime<Utc>,
}
