use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::Donation;
use super::StoreError;

#[derive(Debug, Clone)]
pub struct NewDonation {
    pub creator_email: String,
    pub name: String,
    pub image: Option<String>,
    pub target_amount: Decimal,
    pub last_date: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}

/// Campaign field edits. `collected_amount` is deliberately absent: it is
/// only ever written by the payment recording transaction.
#[derive(Debug, Clone, Default)]
pub struct DonationChanges {
    pub name: Option<String>,
    pub image: Option<String>,
    pub target_amount: Option<Decimal>,
    pub last_date: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}

pub async fn insert(pool: &PgPool, new_donation: NewDonation) -> Result<Donation, StoreError> {
    let donation = sqlx::query_as::<_, Donation>(
        r#"
        INSERT INTO donations
            (creator_email, name, image, target_amount, last_date, short_description, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&new_donation.creator_email)
    .bind(&new_donation.name)
    .bind(&new_donation.image)
    .bind(new_donation.target_amount)
    .bind(new_donation.last_date)
    .bind(&new_donation.short_description)
    .bind(&new_donation.description)
    .fetch_one(pool)
    .await?;
    Ok(donation)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Donation, StoreError> {
    sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("donation campaign {} not found", id)))
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Donation>, StoreError> {
    let donations =
        sqlx::query_as::<_, Donation>("SELECT * FROM donations ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(donations)
}

pub async fn list_by_creator(pool: &PgPool, creator_email: &str) -> Result<Vec<Donation>, StoreError> {
    let donations = sqlx::query_as::<_, Donation>(
        "SELECT * FROM donations WHERE creator_email = $1 ORDER BY created_at DESC",
    )
    .bind(creator_email)
    .fetch_all(pool)
    .await?;
    Ok(donations)
}

pub async fn update_fields(
    pool: &PgPool,
    id: Uuid,
    changes: DonationChanges,
) -> Result<Donation, StoreError> {
    sqlx::query_as::<_, Donation>(
        r#"
        UPDATE donations SET
            name = COALESCE($2, name),
            image = COALESCE($3, image),
            target_amount = COALESCE($4, target_amount),
            last_date = COALESCE($5, last_date),
            short_description = COALESCE($6, short_description),
            description = COALESCE($7, description)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&changes.name)
    .bind(&changes.image)
    .bind(changes.target_amount)
    .bind(changes.last_date)
    .bind(&changes.short_description)
    .bind(&changes.description)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("donation campaign {} not found", id)))
}

pub async fn set_paused(pool: &PgPool, id: Uuid, paused: bool) -> Result<Donation, StoreError> {
    sqlx::query_as::<_, Donation>("UPDATE donations SET paused = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(paused)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("donation campaign {} not found", id)))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM donations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("donation campaign {} not found", id)));
    }
    Ok(())
}
