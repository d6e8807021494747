//! Employee records.
//!
//! An employee is keyed by an externally assigned string id. Apart from
//! deletion, an employee record is never modified after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
  pub employee_id: String,
  pub full_name:   String,
  pub email:       String,
  pub department:  String,
  /// Server-assigned; never changes after creation.
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::create_employee`].
///
/// Raw caller input; [`crate::validate::validate_employee`] trims and checks
/// it before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEmployee {
  #[validate(length(min = 1, message = "employee_id must not be empty"))]
  pub employee_id: String,
  #[validate(length(min = 1, message = "full_name must not be empty"))]
  pub full_name:   String,
  #[validate(email(message = "email is not a valid address"))]
  pub email:       String,
  #[validate(length(min = 1, message = "department must not be empty"))]
  pub department:  String,
}

impl NewEmployee {
  pub fn new(
    employee_id: impl Into<String>,
    full_name: impl Into<String>,
    email: impl Into<String>,
    department: impl Into<String>,
  ) -> Self {
    Self {
      employee_id: employee_id.into(),
      full_name:   full_name.into(),
      email:       email.into(),
      department:  department.into(),
    }
  }
}
