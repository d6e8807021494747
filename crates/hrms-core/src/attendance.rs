//! Attendance records — one presence marker per employee per calendar day.
//!
//! Records are append-only: once marked, a day cannot be amended. They
//! disappear only when their employee is deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use uuid::Uuid;

/// Whether the employee was at work on the day. Spellings are exact and
/// case-sensitive, both on the wire and in the database.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
  IntoStaticStr,
)]
pub enum AttendanceStatus {
  Present,
  Absent,
}

/// A persisted attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
  pub attendance_id: Uuid,
  pub employee_id:   String,
  pub date:          NaiveDate,
  pub status:        AttendanceStatus,
  /// Server-assigned; never changes after creation.
  pub created_at:    DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::mark_attendance`].
///
/// Both `date` and `status` are carried as the caller sent them. The store
/// parses them in a fixed order (status, employee, date, duplicate) so that
/// the reported error is deterministic when several things are wrong at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendance {
  pub employee_id: String,
  /// `YYYY-MM-DD`.
  pub date:        String,
  /// `Present` or `Absent`.
  pub status:      String,
}

impl MarkAttendance {
  pub fn new(
    employee_id: impl Into<String>,
    date: impl Into<String>,
    status: impl Into<String>,
  ) -> Self {
    Self {
      employee_id: employee_id.into(),
      date:        date.into(),
      status:      status.into(),
    }
  }
}
