//! Repository for the `schedules` table.
//!
//! Soft-delete semantics: `find_active_by_id`, `update`, and `soft_delete`
//! only see rows with `is_deleted = FALSE`. `list` does NOT exclude deleted
//! rows; see the note on that method.

use sqlx::PgPool;
use stellight_core::types::{DbId, LocalTimestamp};

use crate::models::schedule::{CreateSchedule, Schedule, ScheduleFilter, UpdateSchedule};

/// Column list for schedules queries.
const COLUMNS: &str =
    "id, stellar_id, is_fixed_time, start_date_time, title, remark, is_deleted, \
     created_at, updated_at";

/// Provides CRUD operations for schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert a new schedule, returning the created row.
    ///
    /// The caller is responsible for verifying that `stellar_id` references
    /// an existing stellar; the table carries no foreign-key constraint.
    pub async fn create(pool: &PgPool, input: &CreateSchedule) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedules (stellar_id, is_fixed_time, start_date_time, title, remark)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(input.stellar_id)
            .bind(input.is_fixed_time)
            .bind(input.start_date_time)
            .bind(&input.title)
            .bind(&input.remark)
            .fetch_one(pool)
            .await
    }

    /// Find a schedule by ID, excluding soft-deleted rows.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules WHERE id = $1 AND is_deleted = FALSE");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a schedule by ID regardless of deletion state.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules WHERE id = $1");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the four mutable fields of an active schedule, returning the
    /// updated row. Returns `None` when the row is absent or soft-deleted.
    /// `stellar_id` and `is_deleted` are never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchedule,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE schedules SET
                is_fixed_time = $2,
                start_date_time = $3,
                title = $4,
                remark = $5,
                updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(input.is_fixed_time)
            .bind(input.start_date_time)
            .bind(&input.title)
            .bind(&input.remark)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an active schedule. Returns `true` if a row was marked.
    ///
    /// The `is_deleted = FALSE` guard makes a second call on the same id
    /// match zero rows, so already-deleted schedules report not-found.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE schedules SET is_deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List schedules matching the given filters, ordered by ascending id.
    ///
    /// Unlike the single-row lookups, this query does NOT filter on
    /// `is_deleted`: soft-deleted schedules appear in listings. That
    /// asymmetry is part of the observed external contract and must not be
    /// "fixed" here.
    pub async fn list(
        pool: &PgPool,
        filter: &ScheduleFilter,
    ) -> Result<Vec<Schedule>, sqlx::Error> {
        let (where_clause, bind_values) = build_schedule_filter(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM schedules {where_clause} ORDER BY id ASC"
        );
        let q = sqlx::query_as::<_, Schedule>(&query);
        bind_filter_values(q, &bind_values).fetch_all(pool).await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built schedule list queries.
enum BindValue {
    BigInt(DbId),
    LocalTimestamp(LocalTimestamp),
}

/// Build a WHERE clause and bind values from `ScheduleFilter` parameters.
///
/// Returns `(where_clause, bind_values)`. The `where_clause` is empty when
/// no filters are active, or starts with `WHERE `. All predicates combine
/// with AND; the range bounds are inclusive.
fn build_schedule_filter(filter: &ScheduleFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(stellar_id) = filter.stellar_id {
        conditions.push(format!("stellar_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(stellar_id));
    }

    if let Some(after) = filter.start_date_time_after {
        conditions.push(format!("start_date_time >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::LocalTimestamp(after));
    }

    if let Some(before) = filter.start_date_time_before {
        conditions.push(format!("start_date_time <= ${bind_idx}"));
        let _ = bind_idx;
        bind_values.push(BindValue::LocalTimestamp(before));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::LocalTimestamp(v) => q = q.bind(*v),
        }
    }
    q
}
