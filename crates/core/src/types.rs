/// Entity identifiers are store-generated UUID strings.
pub type EntityId = String;

/// All timestamps are UTC with millisecond precision on the wire.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
