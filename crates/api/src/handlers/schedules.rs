//! Handlers for schedule CRUD and filtered listing.
//!
//! Mutating endpoints respond with the schedule's numeric id, matching the
//! external contract this service replaces. Soft-deleted schedules are
//! invisible to the single-row endpoints but still appear in listings.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use stellight_core::error::CoreError;
use stellight_core::schedule::{validate_remark, validate_title};
use stellight_core::types::DbId;
use stellight_db::models::schedule::{CreateSchedule, ScheduleFilter, UpdateSchedule};
use stellight_db::repositories::{ScheduleRepo, StellarRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /schedules
///
/// Create a new schedule. The referenced stellar must exist; the check
/// happens here rather than via a database constraint.
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(input): Json<CreateSchedule>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(CoreError::Validation)?;
    validate_remark(input.remark.as_deref()).map_err(CoreError::Validation)?;

    if !StellarRepo::exists(&state.pool, input.stellar_id).await? {
        return Err(AppError::Core(CoreError::InvalidReference {
            entity: "Stellar",
            id: input.stellar_id,
        }));
    }

    let schedule = ScheduleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        schedule_id = schedule.id,
        stellar_id = schedule.stellar_id,
        "Schedule created"
    );

    Ok(Json(schedule.id))
}

/// GET /schedules/{id}
///
/// Get a single schedule by ID. Soft-deleted schedules report not-found,
/// indistinguishable from ids that never existed.
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let schedule = ScheduleRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Schedule",
            id,
        })?;

    Ok(Json(schedule))
}

/// PUT /schedules/{id}
///
/// Replace the four mutable fields of a schedule. `stellarId` and
/// `isDeleted` cannot be changed through this endpoint.
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSchedule>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(CoreError::Validation)?;
    validate_remark(input.remark.as_deref()).map_err(CoreError::Validation)?;

    let schedule = ScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Schedule",
            id,
        })?;

    tracing::info!(schedule_id = id, "Schedule updated");

    Ok(Json(schedule.id))
}

/// DELETE /schedules/{id}
///
/// Soft-delete a schedule. The row stays in the table with
/// `is_deleted = TRUE`; a second delete of the same id reports not-found.
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ScheduleRepo::soft_delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }));
    }

    tracing::info!(schedule_id = id, "Schedule soft-deleted");

    Ok(Json(id))
}

/// GET /schedules?stellarId=&startDateTimeAfter=&startDateTimeBefore=
///
/// List schedules matching the given filters, ascending by id. Soft-deleted
/// rows are included here, unlike the single-row endpoints.
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> AppResult<impl IntoResponse> {
    let schedules = ScheduleRepo::list(&state.pool, &filter).await?;

    Ok(Json(schedules))
}
