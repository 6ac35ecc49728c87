//! Handlers for the `/user-assignments` CRUD resource.
//!
//! The resource is stateless: every request validates its input, checks
//! path/body identifier consistency where relevant, and delegates to the
//! injected store. A failed check returns before any store mutation, so the
//! collection is never left partially updated.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use taskhive_core::CoreError;
use taskhive_db::models::user_assignment::{
    NewUserAssignment, UserAssignmentDto, UserAssignmentPatch,
};
use taskhive_db::SortSpec;

use crate::error::{AppError, AppResult};
use crate::query::SortParams;
use crate::state::AppState;

/// Validate the required fields of a create/replace body.
///
/// This is the statically-declared mapping from the wire shape to a
/// storage candidate: `status` and `assignedAt` must be present, the
/// deadline is carried through as-is.
fn require_fields(dto: &UserAssignmentDto) -> AppResult<NewUserAssignment> {
    let status = dto.status.ok_or(AppError::Validation { field: "status" })?;
    let assigned_at = dto.assigned_at.ok_or(AppError::Validation {
        field: "assignedAt",
    })?;
    Ok(NewUserAssignment {
        status,
        assigned_at,
        deadline: dto.deadline,
    })
}

/// Extract a non-empty identifier from an update body.
fn require_body_id(id: Option<&str>) -> AppResult<String> {
    match id {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(AppError::IdMissing),
    }
}

/// POST /api/user-assignments
///
/// Creates an assignment. The identifier must be absent: creation never
/// accepts client-chosen ids, so a non-empty `id` field is rejected
/// outright, without consulting the store.
pub async fn create_user_assignment(
    State(state): State<AppState>,
    Json(dto): Json<UserAssignmentDto>,
) -> AppResult<impl IntoResponse> {
    if dto.id.as_deref().is_some_and(|id| !id.is_empty()) {
        return Err(AppError::IdExists);
    }
    let candidate = require_fields(&dto)?;

    let record = state.store.insert(candidate);
    tracing::info!(id = %record.id, "User assignment created");

    let location = format!("/api/user-assignments/{}", record.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserAssignmentDto::from(record)),
    ))
}

/// GET /api/user-assignments?sort=field,direction
///
/// Lists all assignments, in store order unless a sort is requested.
pub async fn list_user_assignments(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> AppResult<Json<Vec<UserAssignmentDto>>> {
    let sort = match params.sort.as_deref() {
        Some(raw) => Some(raw.parse::<SortSpec>()?),
        None => None,
    };
    let records = state.store.find_all(sort);
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /api/user-assignments/{id}
pub async fn get_user_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserAssignmentDto>> {
    let record = state
        .store
        .find_by_id(&id)
        .ok_or(CoreError::NotFound {
            entity: "user_assignment",
            id,
        })?;
    Ok(Json(record.into()))
}

/// PUT /api/user-assignments/{id}
///
/// Fully replaces an existing assignment. Checks, in order: the body
/// carries an id, the path and body ids match, and the id is already in
/// the store. Every stored field is then overwritten, including the
/// optional deadline.
pub async fn update_user_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UserAssignmentDto>,
) -> AppResult<Json<UserAssignmentDto>> {
    let body_id = require_body_id(dto.id.as_deref())?;
    if body_id != id {
        return Err(AppError::IdMismatch);
    }
    if !state.store.contains(&id) {
        return Err(AppError::IdNotFound { id });
    }
    let candidate = require_fields(&dto)?;

    let saved = state.store.save(candidate.with_id(body_id));
    tracing::info!(id = %saved.id, "User assignment replaced");

    Ok(Json(saved.into()))
}

/// PATCH /api/user-assignments/{id} (merge-patch body)
///
/// Same identifier checks as PUT, but only the fields present in the patch
/// overwrite stored values; omitted fields keep their previous value.
pub async fn patch_user_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserAssignmentPatch>,
) -> AppResult<Json<UserAssignmentDto>> {
    let body_id = require_body_id(patch.id.as_deref())?;
    if body_id != id {
        return Err(AppError::IdMismatch);
    }
    let mut record = state
        .store
        .find_by_id(&id)
        .ok_or(AppError::IdNotFound { id })?;

    record.apply_patch(&patch);
    let saved = state.store.save(record);
    tracing::info!(id = %saved.id, "User assignment patched");

    Ok(Json(saved.into()))
}

/// DELETE /api/user-assignments/{id}
///
/// Idempotent: deleting an id that is not in the store is still a 204.
pub async fn delete_user_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let removed = state.store.delete_by_id(&id);
    tracing::info!(id = %id, removed, "User assignment deleted");
    Ok(StatusCode::NO_CONTENT)
}
