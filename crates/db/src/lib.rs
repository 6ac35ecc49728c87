//! Storage layer for the taskhive services.
//!
//! Holds the domain model structs with their wire DTOs, the list-ordering
//! [`SortSpec`] type, and [`AssignmentStore`], an in-memory keyed collection
//! that stands in for a document store. Per-key reads and writes are atomic
//! (guarded by a single `RwLock`); identifiers are generated on insert.

pub mod models;
pub mod sort;
pub mod store;

pub use sort::SortSpec;
pub use store::AssignmentStore;
