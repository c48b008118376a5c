/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Audit timestamps (`created_at` / `updated_at`) are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Schedule start times are wall-clock values. No timezone conversion is
/// performed anywhere in the service; the value round-trips as entered.
pub type LocalTimestamp = chrono::NaiveDateTime;
