//! Schedule row model and request DTOs.
//!
//! External JSON uses camelCase field names; that contract predates this
//! implementation and is preserved as-is.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stellight_core::types::{DbId, LocalTimestamp, Timestamp};

/// A row from the `schedules` table.
///
/// Serializes to the external `ScheduleView` shape: the audit timestamps
/// are internal and never exposed.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: DbId,
    pub stellar_id: DbId,
    pub is_fixed_time: bool,
    pub start_date_time: LocalTimestamp,
    pub title: String,
    pub remark: Option<String>,
    pub is_deleted: bool,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new schedule.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedule {
    pub stellar_id: DbId,
    pub is_fixed_time: bool,
    pub start_date_time: LocalTimestamp,
    pub title: String,
    pub remark: Option<String>,
}

/// DTO for updating a schedule. All four mutable fields are replaced in one
/// statement; `stellar_id` and `is_deleted` are not updatable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchedule {
    pub is_fixed_time: bool,
    pub start_date_time: LocalTimestamp,
    pub title: String,
    pub remark: Option<String>,
}

/// Optional list filters, combined with logical AND. Range bounds on
/// `start_date_time` are inclusive; a missing bound is open-ended.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleFilter {
    pub stellar_id: Option<DbId>,
    pub start_date_time_after: Option<LocalTimestamp>,
    pub start_date_time_before: Option<LocalTimestamp>,
}
