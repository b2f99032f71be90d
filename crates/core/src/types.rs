/// All entity identifiers are positive integers assigned as `max + 1`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
