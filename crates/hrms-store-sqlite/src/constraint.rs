//! Recognising constraint violations raised by SQLite at write time.
//!
//! Pre-checks catch the common case. These helpers cover the window between
//! a pre-check and the insert, where another writer can get in first; the
//! schema's constraints reject the loser, and the store reports the same
//! domain error the pre-check would have.

use rusqlite::{ErrorCode, ffi};

/// Which schema constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
  /// `employees.employee_id` primary key.
  EmployeeId,
  /// `employees.email` unique.
  Email,
  /// `UNIQUE (employee_id, date)` on `attendance`.
  AttendanceDay,
  /// `attendance.employee_id` foreign key: the employee is gone.
  MissingEmployee,
}

/// Classify a database error. Returns `None` for anything that is not a
/// constraint violation this schema defines.
pub fn violation(err: &tokio_rusqlite::Error) -> Option<Violation> {
  match err {
    tokio_rusqlite::Error::Rusqlite(e) => rusqlite_violation(e),
    _ => None,
  }
}

pub fn rusqlite_violation(err: &rusqlite::Error) -> Option<Violation> {
  let rusqlite::Error::SqliteFailure(failure, message) = err else {
    return None;
  };
  if failure.code != ErrorCode::ConstraintViolation {
    return None;
  }

  // SQLite names the offending columns in the message, e.g.
  // "UNIQUE constraint failed: attendance.employee_id, attendance.date".
  let message = message.as_deref().unwrap_or_default();

  match failure.extended_code {
    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Violation::MissingEmployee),
    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
      if message.contains("attendance.date") {
        Some(Violation::AttendanceDay)
      } else if message.contains("employees.email") {
        Some(Violation::Email)
      } else if message.contains("employees.employee_id") {
        Some(Violation::EmployeeId)
      } else {
        None
      }
    }
    _ => None,
  }
}
