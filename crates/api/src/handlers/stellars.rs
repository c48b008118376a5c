//! Handlers for stellar management.
//!
//! Minimal surface: schedules only consult stellars for existence, so only
//! create, get, and list are exposed.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use stellight_core::error::CoreError;
use stellight_core::schedule::validate_stellar_name;
use stellight_core::types::DbId;
use stellight_db::models::stellar::CreateStellar;
use stellight_db::repositories::StellarRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /stellars
///
/// Create a new stellar.
pub async fn create_stellar(
    State(state): State<AppState>,
    Json(input): Json<CreateStellar>,
) -> AppResult<impl IntoResponse> {
    validate_stellar_name(&input.name).map_err(CoreError::Validation)?;

    let stellar = StellarRepo::create(&state.pool, &input).await?;

    tracing::info!(stellar_id = stellar.id, "Stellar created");

    Ok(Json(stellar))
}

/// GET /stellars/{id}
///
/// Get a single stellar by ID.
pub async fn get_stellar(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stellar = StellarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Stellar",
            id,
        })?;

    Ok(Json(stellar))
}

/// GET /stellars
///
/// List all stellars, ascending by id.
pub async fn list_stellars(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stellars = StellarRepo::list(&state.pool).await?;

    Ok(Json(stellars))
}
