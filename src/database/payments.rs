use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::Payment;
use super::StoreError;

/// Record a payment and bump the campaign total as one transaction.
///
/// The increment is a single SQL `+` against the stored value, so
/// concurrent payments against the same campaign serialize on the row and
/// the total always equals the sum of recorded payments. Either both
/// writes commit or neither does.
pub async fn record(
    pool: &PgPool,
    donation_id: Uuid,
    payer_email: &str,
    amount: Decimal,
) -> Result<Payment, StoreError> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        "UPDATE donations SET collected_amount = collected_amount + $2 WHERE id = $1",
    )
    .bind(donation_id)
    .bind(amount)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!(
            "donation campaign {} not found",
            donation_id
        )));
    }

    let payment = sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (donation_id, payer_email, amount)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(donation_id)
    .bind(payer_email)
    .bind(amount)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(payment)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Payment, StoreError> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("payment {} not found", id)))
}

pub async fn list_for_donation(pool: &PgPool, donation_id: Uuid) -> Result<Vec<Payment>, StoreError> {
    let payments = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments WHERE donation_id = $1 ORDER BY created_at DESC",
    )
    .bind(donation_id)
    .fetch_all(pool)
    .await?;
    Ok(payments)
}

pub async fn list_by_payer(pool: &PgPool, payer_email: &str) -> Result<Vec<Payment>, StoreError> {
    let payments = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments WHERE payer_email = $1 ORDER BY created_at DESC",
    )
    .bind(payer_email)
    .fetch_all(pool)
    .await?;
    Ok(payments)
}

pub async fn list_by_payer_for_donation(
    pool: &PgPool,
    donation_id: Uuid,
    payer_email: &str,
) -> Result<Vec<Payment>, StoreError> {
    let payments = sqlx::query_as::<_, Payment>(
        r#"
        SELECT * FROM payments
        WHERE donation_id = $1 AND payer_email = $2
        ORDER BY created_at DESC
        "#,
    )
    .bind(donation_id)
    .bind(payer_email)
    .fetch_all(pool)
    .await?;
    Ok(payments)
}

/// Correction path only: deleting a payment does not rewind the campaign
/// total, it removes the record itself.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM payments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("payment {} not found", id)));
    }
    Ok(())
}
