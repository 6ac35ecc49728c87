pub mod health;
pub mod user_assignment;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /user-assignments        list (GET), create (POST)
/// /user-assignments/{id}   get, replace (PUT), merge-patch (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/user-assignments", user_assignment::router())
}
