pub mod health;
pub mod schedules;
pub mod stellars;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /schedules              GET (filtered list), POST
/// /schedules/{id}         GET, PUT, DELETE (soft)
///
/// /stellars               GET, POST
/// /stellars/{id}          GET
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/schedules", schedules::router())
        .nest("/stellars", stellars::router())
}
