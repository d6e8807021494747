//! Error types for `hrms-core`.
//!
//! Every failure a caller can trigger falls into one of three categories
//! ([`ErrorKind`]). Storage backends add a fourth, [`ErrorKind::Storage`], for
//! faults that are not the caller's doing.

use chrono::NaiveDate;
use thiserror::Error;

/// The category a failure belongs to. Transport layers map on this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Malformed or missing input: blank field, bad email, unknown status,
  /// unparseable date.
  Validation,
  /// A referenced entity does not exist.
  NotFound,
  /// A uniqueness invariant would be violated.
  Conflict,
  /// The backing store failed.
  Storage,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("Invalid status: {0:?}")]
  InvalidStatus(String),

  #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
  InvalidDateFormat(String),

  #[error("Employee not found: {0}")]
  EmployeeNotFound(String),

  #[error("Employee ID already exists: {0}")]
  DuplicateId(String),

  #[error("Email already exists: {0}")]
  DuplicateEmail(String),

  #[error("Attendance already marked for {employee_id} on {date}")]
  DuplicateAttendance {
    employee_id: String,
    date:        NaiveDate,
  },
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Validation(_) | Self::InvalidStatus(_) | Self::InvalidDateFormat(_) => {
        ErrorKind::Validation
      }
      Self::EmployeeNotFound(_) => ErrorKind::NotFound,
      Self::DuplicateId(_)
      | Self::DuplicateEmail(_)
      | Self::DuplicateAttendance { .. } => ErrorKind::Conflict,
    }
  }
}

/// Implemented by every store error so that higher layers can categorise a
/// failure without knowing which backend produced it.
pub trait Classify {
  fn kind(&self) -> ErrorKind;
}

impl Classify for Error {
  fn kind(&self) -> ErrorKind { Error::kind(self) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
