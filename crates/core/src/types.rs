/// Primary-key type for all tables (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp used for all temporal columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
