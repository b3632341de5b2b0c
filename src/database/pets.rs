use sqlx::PgPool;
use uuid::Uuid;

use super::models::Pet;
use super::StoreError;

#[derive(Debug, Clone)]
pub struct NewPet {
    pub lister_email: String,
    pub name: String,
    pub age: Option<i32>,
    pub category: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Field edits for an existing listing. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct PetChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub async fn insert(pool: &PgPool, new_pet: NewPet) -> Result<Pet, StoreError> {
    let pet = sqlx::query_as::<_, Pet>(
        r#"
        INSERT INTO pets (lister_email, name, age, category, location, description, image)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&new_pet.lister_email)
    .bind(&new_pet.name)
    .bind(new_pet.age)
    .bind(&new_pet.category)
    .bind(&new_pet.location)
    .bind(&new_pet.description)
    .bind(&new_pet.image)
    .fetch_one(pool)
    .await?;
    Ok(pet)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Pet, StoreError> {
    sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("pet {} not found", id)))
}

/// Unadopted listings, newest first. The default public browse view.
pub async fn list_available(pool: &PgPool) -> Result<Vec<Pet>, StoreError> {
    let pets = sqlx::query_as::<_, Pet>(
        "SELECT * FROM pets WHERE adopted = false ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(pets)
}

/// Category + case-insensitive name search. Category `all` (or none)
/// applies the search filter only.
pub async fn search(
    pool: &PgPool,
    category: Option<&str>,
    name_search: Option<&str>,
) -> Result<Vec<Pet>, StoreError> {
    let category = category.filter(|c| *c != "all");
    let pattern = name_search.map(|s| format!("%{}%", s));

    let pets = sqlx::query_as::<_, Pet>(
        r#"
        SELECT * FROM pets
        WHERE ($1::text IS NULL OR category = $1)
          AND ($2::text IS NULL OR name ILIKE $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(category)
    .bind(pattern)
    .fetch_all(pool)
    .await?;
    Ok(pets)
}

pub async fn list_by_lister(pool: &PgPool, lister_email: &str) -> Result<Vec<Pet>, StoreError> {
    let pets = sqlx::query_as::<_, Pet>(
        "SELECT * FROM pets WHERE lister_email = $1 ORDER BY created_at DESC",
    )
    .bind(lister_email)
    .fetch_all(pool)
    .await?;
    Ok(pets)
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Pet>, StoreError> {
    let pets = sqlx::query_as::<_, Pet>("SELECT * FROM pets ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(pets)
}

pub async fn update_fields(pool: &PgPool, id: Uuid, changes: PetChanges) -> Result<Pet, StoreError> {
    sqlx::query_as::<_, Pet>(
        r#"
        UPDATE pets SET
            name = COALESCE($2, name),
            age = COALESCE($3, age),
            category = COALESCE($4, category),
            location = COALESCE($5, location),
            description = COALESCE($6, description),
            image = COALESCE($7, image)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&changes.name)
    .bind(changes.age)
    .bind(&changes.category)
    .bind(&changes.location)
    .bind(&changes.description)
    .bind(&changes.image)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("pet {} not found", id)))
}

pub async fn set_adopted(pool: &PgPool, id: Uuid, adopted: bool) -> Result<Pet, StoreError> {
    sqlx::query_as::<_, Pet>("UPDATE pets SET adopted = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(adopted)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("pet {} not found", id)))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM pets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("pet {} not found", id)));
    }
    Ok(())
}
