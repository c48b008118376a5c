//! Repository for the `stellars` table.

use sqlx::PgPool;
use stellight_core::types::DbId;

use crate::models::stellar::{CreateStellar, Stellar};

/// Column list for stellars queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for stellars.
pub struct StellarRepo;

impl StellarRepo {
    /// Insert a new stellar, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStellar) -> Result<Stellar, sqlx::Error> {
        let query = format!(
            "INSERT INTO stellars (name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stellar>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a stellar by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stellar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stellars WHERE id = $1");
        sqlx::query_as::<_, Stellar>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a stellar with the given ID exists. Used by the
    /// schedule create path before inserting.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM stellars WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all stellars, ordered by ascending id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Stellar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stellars ORDER BY id ASC");
        sqlx::query_as::<_, Stellar>(&query).fetch_all(pool).await
    }
}
