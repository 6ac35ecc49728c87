//! List-ordering support for collection reads.
//!
//! Parses the `?sort=field,direction` query value (e.g. `id,desc`) into a
//! typed [`SortSpec`] that the store applies when listing records.

use std::str::FromStr;

use taskhive_core::CoreError;

use crate::models::user_assignment::UserAssignment;

/// Fields a collection read may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Status,
    AssignedAt,
    Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A parsed sort request: which field, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Order `records` in place according to this spec.
    ///
    /// Sorting is stable, so records that compare equal keep their
    /// insertion order. Absent deadlines sort before present ones.
    pub fn apply(&self, records: &mut [UserAssignment]) {
        records.sort_by(|a, b| {
            let ordering = match self.field {
                SortField::Id => a.id.cmp(&b.id),
                SortField::Status => a.status.cmp(&b.status),
                SortField::AssignedAt => a.assigned_at.cmp(&b.assigned_at),
                SortField::Deadline => a.deadline.cmp(&b.deadline),
            };
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

impl FromStr for SortSpec {
    type Err = CoreError;

    /// Accepts `field` or `field,asc|desc`; direction defaults to ascending.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(2, ',');
        let field = match parts.next().unwrap_or_default().trim() {
            "id" => SortField::Id,
            "status" => SortField::Status,
            "assignedAt" => SortField::AssignedAt,
            "deadline" => SortField::Deadline,
            other => {
                return Err(CoreError::Validation(format!(
                    "unknown sort field '{other}'"
                )))
            }
        };
        let direction = match parts.next().map(str::trim) {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(CoreError::Validation(format!(
                    "unknown sort direction '{other}'"
                )))
            }
        };
        Ok(SortSpec { field, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_field_and_direction() {
        let spec: SortSpec = "id,desc".parse().unwrap();
        assert_eq!(spec.field, SortField::Id);
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        let spec: SortSpec = "assignedAt".parse().unwrap();
        assert_eq!(spec.field, SortField::AssignedAt);
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn rejects_unknown_field_and_direction() {
        assert_matches!(
            "priority,asc".parse::<SortSpec>(),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            "id,sideways".parse::<SortSpec>(),
            Err(CoreError::Validation(_))
        );
    }
}
