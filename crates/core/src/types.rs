/// All primary keys are UUIDs, rendered in the 36-character hyphenated form.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
