//! Request handlers, one module per resource.

pub mod user_assignment;
