use std::sync::Arc;

use taskhive_db::AssignmentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Handlers hold no
/// other mutable state; everything lives in the store.
#[derive(Clone)]
pub struct AppState {
    /// The assignment collection.
    pub store: AssignmentStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
