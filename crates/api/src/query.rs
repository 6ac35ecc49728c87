//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Sort parameter for collection reads (`?sort=field,direction`).
///
/// The raw string is parsed into a `SortSpec` in the handler so that a
/// malformed value surfaces as a 400 rather than a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort: Option<String>,
}
