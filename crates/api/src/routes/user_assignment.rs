//! Route definitions for the user assignment resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_assignment;
use crate::state::AppState;

/// Assignment routes mounted at `/user-assignments`.
///
/// The collection path only accepts GET and POST; axum answers PUT or
/// PATCH against it with 405 Method Not Allowed.
///
/// ```text
/// GET    /      -> list_user_assignments
/// POST   /      -> create_user_assignment
/// GET    /{id}  -> get_user_assignment
/// PUT    /{id}  -> update_user_assignment
/// PATCH  /{id}  -> patch_user_assignment
/// DELETE /{id}  -> delete_user_assignment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user_assignment::list_user_assignments)
                .post(user_assignment::create_user_assignment),
        )
        .route(
            "/{id}",
            get(user_assignment::get_user_assignment)
                .put(user_assignment::update_user_assignment)
                .patch(user_assignment::patch_user_assignment)
                .delete(user_assignment::delete_user_assignment),
        )
}
