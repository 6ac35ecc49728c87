//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct matching the stored record
//! - A `Deserialize` wire DTO with the camelCase JSON field names
//! - A `Deserialize` patch DTO (all `Option` fields) for merge updates

pub mod user_assignment;
