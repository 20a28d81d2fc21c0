use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::{AppError, ResultExt};
use crate::models::EnrichedPerson;

/// Persistence for enriched person records, keyed by a storage-assigned id.
///
/// `update` and `delete` report the number of affected rows instead of
/// failing when the id is unknown; callers decide what zero means.
#[async_trait]
pub trait PersonStorage: Send + Sync {
    /// Inserts a new row and returns its id.
    async fn create(&self, person: &EnrichedPerson) -> Result<i64, AppError>;

    /// Fails with `AppError::NotFound` when no row matches.
    async fn get_by_id(&self, id: i64) -> Result<EnrichedPerson, AppError>;

    /// Overwrites all six fields of the row.
    async fn update(&self, id: i64, person: &EnrichedPerson) -> Result<u64, AppError>;

    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}

/// Postgres-backed storage over the `people` table.
pub struct PgPersonStorage {
    pool: PgPool,
}

impl PgPersonStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStorage for PgPersonStorage {
    async fn create(&self, person: &EnrichedPerson) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO people (name, surname, patronymic, age, gender, nationality)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&person.person.name)
        .bind(&person.person.surname)
        .bind(&person.person.patronymic)
        .bind(person.age)
        .bind(&person.gender)
        .bind(&person.nationality)
        .fetch_one(&self.pool)
        .await
        .context("inserting person")?;

        tracing::info!("Stored person {} with id {}", person.person.name, id);
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<EnrichedPerson, AppError> {
        sqlx::query_as::<_, EnrichedPerson>(
            "SELECT name, surname, patronymic, age, gender, nationality
             FROM people WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("loading person {}", id))?
        .ok_or_else(|| AppError::NotFound("Person not found".to_string()))
    }

    async fn update(&self, id: i64, person: &EnrichedPerson) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE people
             SET name = $1, surname = $2, patronymic = $3, age = $4, gender = $5, nationality = $6
             WHERE id = $7",
        )
        .bind(&person.person.name)
        .bind(&person.person.surname)
        .bind(&person.person.patronymic)
        .bind(person.age)
        .bind(&person.gender)
        .bind(&person.nationality)
        .bind(id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("updating person {}", id))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("deleting person {}", id))?;

        Ok(result.rows_affected())
    }
}
