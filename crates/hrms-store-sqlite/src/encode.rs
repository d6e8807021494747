//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microsecond
//! precision, `Z` suffix) so that lexical order matches chronological order.
//! Dates are `YYYY-MM-DD`. UUIDs are hyphenated lowercase strings.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use hrms_core::{
  attendance::{AttendanceRecord, AttendanceStatus},
  employee::Employee,
  summary::EmployeeAttendanceSummary,
  validate::DATE_FORMAT,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(format!("timestamp {s:?}: {e}")))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::Decode(format!("date {s:?}: {e}")))
}

// ─── AttendanceStatus ────────────────────────────────────────────────────────

pub fn encode_status(s: AttendanceStatus) -> &'static str { s.into() }

pub fn decode_status(s: &str) -> Result<AttendanceStatus> {
  s.parse::<AttendanceStatus>()
    .map_err(|_| Error::Decode(format!("unknown attendance status: {s:?}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `employees` row.
pub struct RawEmployee {
  pub employee_id: String,
  pub full_name:   String,
  pub email:       String,
  pub department:  String,
  pub created_at:  String,
}

impl RawEmployee {
  pub const COLUMNS: &'static str =
    "employee_id, full_name, email, department, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      employee_id: row.get(0)?,
      full_name:   row.get(1)?,
      email:       row.get(2)?,
      department:  row.get(3)?,
      created_at:  row.get(4)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      created_at:  decode_dt(&self.created_at)?,
      employee_id: self.employee_id,
      full_name:   self.full_name,
      email:       self.email,
      department:  self.department,
    })
  }
}

/// Raw strings read directly from an `attendance` row.
pub struct RawAttendance {
  pub attendance_id: String,
  pub employee_id:   String,
  pub date:          String,
  pub status:        String,
  pub created_at:    String,
}

impl RawAttendance {
  pub const COLUMNS: &'static str =
    "attendance_id, employee_id, date, status, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      attendance_id: row.get(0)?,
      employee_id:   row.get(1)?,
      date:          row.get(2)?,
      status:        row.get(3)?,
      created_at:    row.get(4)?,
    })
  }

  pub fn into_record(self) -> Result<AttendanceRecord> {
    Ok(AttendanceRecord {
      attendance_id: decode_uuid(&self.attendance_id)?,
      date:          decode_date(&self.date)?,
      status:        decode_status(&self.status)?,
      created_at:    decode_dt(&self.created_at)?,
      employee_id:   self.employee_id,
    })
  }
}

/// One row of the employees ⟕ attendance roll-up.
pub struct RawEmployeeTally {
  pub employee_id:  String,
  pub full_name:    String,
  pub department:   String,
  pub total_days:   i64,
  pub present_days: i64,
}

impl RawEmployeeTally {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      employee_id:  row.get(0)?,
      full_name:    row.get(1)?,
      department:   row.get(2)?,
      total_days:   row.get(3)?,
      present_days: row.get(4)?,
    })
  }

  pub fn into_summary(self) -> EmployeeAttendanceSummary {
    EmployeeAttendanceSummary::new(
      self.employee_id,
      self.full_name,
      self.department,
      count(self.total_days),
      count(self.present_days),
    )
  }
}

/// SQLite hands back `COUNT(*)` as a signed integer; it is never negative.
pub fn count(n: i64) -> u64 { u64::try_from(n).unwrap_or(0) }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_spellings_match_the_check_constraint() {
    assert_eq!(encode_status(AttendanceStatus::Present), "Present");
    assert_eq!(encode_status(AttendanceStatus::Absent), "Absent");
    for s in [AttendanceStatus::Present, AttendanceStatus::Absent] {
      assert_eq!(decode_status(encode_status(s)).unwrap(), s);
    }
    assert!(decode_status("present").is_err());
  }
}
