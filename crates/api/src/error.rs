use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskhive_core::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the request-shaped
/// variants the assignment resource produces. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
///
/// Two deliberate status-code quirks, kept for client compatibility:
/// - a client-supplied id on create is a 400, never a 409;
/// - an update aimed at a nonexistent id is a 400, while a read of a
///   nonexistent id is a 404.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskhive_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A required field was missing or null on a create/replace body.
    #[error("required field '{field}' must not be null")]
    Validation { field: &'static str },

    /// The create body carried a client-chosen identifier.
    #[error("a new assignment cannot already have an id")]
    IdExists,

    /// The update body carried no identifier.
    #[error("request body is missing an id")]
    IdMissing,

    /// The path identifier and the body identifier differ.
    #[error("path id does not match body id")]
    IdMismatch,

    /// An update referenced an identifier that is not in the store.
    #[error("no assignment with id {id} exists")]
    IdNotFound { id: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                }
            },
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::IdExists => (StatusCode::BAD_REQUEST, "ID_EXISTS"),
            AppError::IdMissing => (StatusCode::BAD_REQUEST, "ID_MISSING"),
            AppError::IdMismatch => (StatusCode::BAD_REQUEST, "ID_MISMATCH"),
            AppError::IdNotFound { .. } => (StatusCode::BAD_REQUEST, "ID_NOT_FOUND"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        };

        let message = match &self {
            AppError::Core(CoreError::Internal(_)) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::Validation { field } = &self {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}
