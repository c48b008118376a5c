//! Route definitions for stellars.
//!
//! Mounted at `/stellars` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::stellars;
use crate::state::AppState;

/// Stellar routes.
///
/// ```text
/// GET    /      -> list_stellars
/// POST   /      -> create_stellar
/// GET    /{id}  -> get_stellar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(stellars::list_stellars).post(stellars::create_stellar),
        )
        .route("/{id}", get(stellars::get_stellar))
}
