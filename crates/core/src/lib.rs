//! Shared domain types for the taskhive services.

pub mod error;
pub mod types;

pub use error::CoreError;
