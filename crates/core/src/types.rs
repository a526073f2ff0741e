/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identity recorded as creator/modifier until caller identity is resolved
/// from request credentials.
pub const PLACEHOLDER_USER_ID: DbId = 1;
