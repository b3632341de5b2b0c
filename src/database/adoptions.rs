use sqlx::PgPool;
use uuid::Uuid;

use super::models::AdoptionRequest;
use super::StoreError;

#[derive(Debug, Clone)]
pub struct NewAdoptionRequest {
    pub pet_id: Uuid,
    pub requester_email: String,
    pub message: Option<String>,
}

pub async fn insert(
    pool: &PgPool,
    request: NewAdoptionRequest,
) -> Result<AdoptionRequest, StoreError> {
    let row = sqlx::query_as::<_, AdoptionRequest>(
        r#"
        INSERT INTO adoption_requests (pet_id, requester_email, message)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(request.pet_id)
    .bind(&request.requester_email)
    .bind(&request.message)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<AdoptionRequest, StoreError> {
    sqlx::query_as::<_, AdoptionRequest>("SELECT * FROM adoption_requests WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("adoption request {} not found", id)))
}

/// Requests against listings owned by the given lister, joined through
/// the pets table.
pub async fn list_for_lister(
    pool: &PgPool,
    lister_email: &str,
) -> Result<Vec<AdoptionRequest>, StoreError> {
    let rows = sqlx::query_as::<_, AdoptionRequest>(
        r#"
        SELECT ar.*
        FROM adoption_requests ar
        JOIN pets p ON p.id = ar.pet_id
        WHERE p.lister_email = $1
        ORDER BY ar.created_at DESC
        "#,
    )
    .bind(lister_email)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM adoption_requests WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("adoption request {} not found", id)));
    }
    Ok(())
}
