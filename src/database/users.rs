use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Role, User};
use super::StoreError;

/// Fields supplied at first contact. Role is always member; promotion goes
/// through the admin-gated role update.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Upsert-by-email: insert if absent, otherwise return the existing row
/// untouched. Calling this twice with the same email is idempotent.
pub async fn upsert_by_email(pool: &PgPool, new_user: NewUser) -> Result<User, StoreError> {
    let inserted = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, image)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&new_user.email)
    .bind(&new_user.name)
    .bind(&new_user.image)
    .fetch_optional(pool)
    .await?;

    if let Some(user) = inserted {
        return Ok(user);
    }

    // Conflict path: the record already existed, return it as-is
    find_by_email(pool, &new_user.email)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {} not found", new_user.email)))
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Stored role for the authorization gate and ownership policy
pub async fn find_role(pool: &PgPool, email: &str) -> Result<Option<Role>, StoreError> {
    let role = sqlx::query_scalar::<_, Role>("SELECT role FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(role)
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, StoreError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn set_role(pool: &PgPool, id: Uuid, role: Role) -> Result<User, StoreError> {
    sqlx::query_as::<_, User>("UPDATE users SET role = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(role)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {} not found", id)))
}
