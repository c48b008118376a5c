//! Route definitions for schedules.
//!
//! Mounted at `/schedules` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedules;
use crate::state::AppState;

/// Schedule routes.
///
/// ```text
/// GET    /      -> list_schedules (?stellarId, startDateTimeAfter, startDateTimeBefore)
/// POST   /      -> create_schedule
/// GET    /{id}  -> get_schedule
/// PUT    /{id}  -> update_schedule
/// DELETE /{id}  -> delete_schedule (soft)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(schedules::list_schedules).post(schedules::create_schedule),
        )
        .route(
            "/{id}",
            get(schedules::get_schedule)
                .put(schedules::update_schedule)
                .delete(schedules::delete_schedule),
        )
}
