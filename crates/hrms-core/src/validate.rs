//! The validation half of the validation/mapping layer.
//!
//! Each function turns raw caller input into a typed value or a categorised
//! [`Error`]. Nothing here touches storage; referential checks (does the
//! employee exist, is the day already marked) belong to the store.

use chrono::NaiveDate;
use validator::Validate;

use crate::{
  Error, Result, attendance::AttendanceStatus, employee::NewEmployee,
};

/// The only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim every field of `input`, then check that none is blank and that the
/// email is syntactically valid. Returns the normalised employee.
pub fn validate_employee(input: NewEmployee) -> Result<NewEmployee> {
  let trimmed = NewEmployee {
    employee_id: input.employee_id.trim().to_owned(),
    full_name:   input.full_name.trim().to_owned(),
    email:       input.email.trim().to_owned(),
    department:  input.department.trim().to_owned(),
  };

  if let Err(errors) = trimmed.validate() {
    let mut messages: Vec<String> = errors
      .field_errors()
      .values()
      .flat_map(|errs| errs.iter())
      .map(|e| {
        e.message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| e.code.to_string())
      })
      .collect();
    messages.sort();
    return Err(Error::Validation(messages.join("; ")));
  }

  Ok(trimmed)
}

/// Parse an attendance status; only `Present` and `Absent` are accepted.
pub fn parse_status(raw: &str) -> Result<AttendanceStatus> {
  raw
    .parse::<AttendanceStatus>()
    .map_err(|_| Error::InvalidStatus(raw.to_owned()))
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// The layout is checked byte-for-byte first: chrono's `%Y` alone would also
/// take a signed or short year, and surrounding whitespace is not trimmed.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
  let well_formed = raw.len() == 10
    && raw.bytes().enumerate().all(|(i, b)| match i {
      4 | 7 => b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !well_formed {
    return Err(Error::InvalidDateFormat(raw.to_owned()));
  }
  NaiveDate::parse_from_str(raw, DATE_FORMAT)
    .map_err(|_| Error::InvalidDateFormat(raw.to_owned()))
}
