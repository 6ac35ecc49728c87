//! User assignment models and DTOs.
//!
//! A `UserAssignment` records that a piece of work has been handed to a
//! user: when it was assigned, an optional deadline, and where it stands.

use serde::{Deserialize, Serialize};
use taskhive_core::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (stored records)
// ---------------------------------------------------------------------------

/// Lifecycle state of an assignment.
///
/// Serialized in SCREAMING_SNAKE_CASE on the wire (`"ASSIGNED"`, `"COMPLETED"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Assigned,
    Completed,
}

/// A persisted user assignment.
///
/// `status` and `assigned_at` are never absent once a record is stored;
/// the create path validates them before insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignment {
    pub id: EntityId,
    pub status: AssignmentStatus,
    pub assigned_at: Timestamp,
    pub deadline: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// DTOs (request/response payloads)
// ---------------------------------------------------------------------------

/// Wire representation of an assignment.
///
/// Every field is optional on input so that missing required fields are
/// rejected by validation (with a field-level error payload) rather than by
/// the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignmentDto {
    pub id: Option<EntityId>,
    pub status: Option<AssignmentStatus>,
    pub assigned_at: Option<Timestamp>,
    pub deadline: Option<Timestamp>,
}

/// A validated candidate for insertion; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewUserAssignment {
    pub status: AssignmentStatus,
    pub assigned_at: Timestamp,
    pub deadline: Option<Timestamp>,
}

impl NewUserAssignment {
    /// Attach a known identifier, producing a full record (the PUT path).
    pub fn with_id(self, id: EntityId) -> UserAssignment {
        UserAssignment {
            id,
            status: self.status,
            assigned_at: self.assigned_at,
            deadline: self.deadline,
        }
    }
}

/// Merge-patch payload for partial updates.
///
/// A field that is absent (or null) in the patch body leaves the stored
/// value untouched; only present fields overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignmentPatch {
    pub id: Option<EntityId>,
    pub status: Option<AssignmentStatus>,
    pub assigned_at: Option<Timestamp>,
    pub deadline: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Wire <-> storage mapping
// ---------------------------------------------------------------------------

impl From<UserAssignment> for UserAssignmentDto {
    fn from(record: UserAssignment) -> Self {
        UserAssignmentDto {
            id: Some(record.id),
            status: Some(record.status),
            assigned_at: Some(record.assigned_at),
            deadline: record.deadline,
        }
    }
}

impl UserAssignment {
    /// Apply a merge patch, overwriting only the fields the patch carries.
    ///
    /// The identifier is deliberately not touched; path/body consistency is
    /// checked by the handler before the record is loaded.
    pub fn apply_patch(&mut self, patch: &UserAssignmentPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assigned_at) = patch.assigned_at {
            self.assigned_at = assigned_at;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = Some(deadline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> UserAssignment {
        UserAssignment {
            id: "a1".to_string(),
            status: AssignmentStatus::Assigned,
            assigned_at: Utc.timestamp_millis_opt(0).unwrap(),
            deadline: Some(Utc.timestamp_millis_opt(86_400_000).unwrap()),
        }
    }

    #[test]
    fn status_uses_screaming_snake_case_on_the_wire() {
        let json = serde_json::to_string(&AssignmentStatus::Assigned).unwrap();
        assert_eq!(json, "\"ASSIGNED\"");
        let status: AssignmentStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(status, AssignmentStatus::Completed);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut record = record();
        let original_deadline = record.deadline;

        let patch = UserAssignmentPatch {
            assigned_at: Some(Utc.timestamp_millis_opt(5_000).unwrap()),
            ..Default::default()
        };
        record.apply_patch(&patch);

        assert_eq!(record.status, AssignmentStatus::Assigned);
        assert_eq!(record.assigned_at, Utc.timestamp_millis_opt(5_000).unwrap());
        assert_eq!(record.deadline, original_deadline);
    }

    #[test]
    fn patch_with_all_fields_overwrites_everything_but_the_id() {
        let mut record = record();
        let patch = UserAssignmentPatch {
            id: Some("ignored".to_string()),
            status: Some(AssignmentStatus::Completed),
            assigned_at: Some(Utc.timestamp_millis_opt(9_000).unwrap()),
            deadline: Some(Utc.timestamp_millis_opt(10_000).unwrap()),
        };
        record.apply_patch(&patch);

        assert_eq!(record.id, "a1");
        assert_eq!(record.status, AssignmentStatus::Completed);
        assert_eq!(record.assigned_at, Utc.timestamp_millis_opt(9_000).unwrap());
        assert_eq!(record.deadline, Some(Utc.timestamp_millis_opt(10_000).unwrap()));
    }

    #[test]
    fn dto_mapping_keeps_every_field() {
        let dto = UserAssignmentDto::from(record());
        assert_eq!(dto.id.as_deref(), Some("a1"));
        assert_eq!(dto.status, Some(AssignmentStatus::Assigned));
        assert_eq!(dto.assigned_at, Some(Utc.timestamp_millis_opt(0).unwrap()));
        assert_eq!(dto.deadline, Some(Utc.timestamp_millis_opt(86_400_000).unwrap()));
    }

    #[test]
    fn dto_serializes_camel_case_with_null_deadline() {
        let mut entity = record();
        entity.deadline = None;
        let value = serde_json::to_value(UserAssignmentDto::from(entity)).unwrap();
        assert_eq!(value["id"], "a1");
        assert_eq!(value["status"], "ASSIGNED");
        assert_eq!(value["assignedAt"], "1970-01-01T00:00:00Z");
        assert!(value["deadline"].is_null());
    }
}
