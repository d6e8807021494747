//! Attendance roll-ups: an organisation-wide overview and one line per
//! employee. Never stored, always derived from the attendance table.

use serde::{Deserialize, Serialize};

/// Percentage of `present` over `total`, rounded to one decimal place.
/// Zero when there is nothing to count.
pub fn present_rate(present: u64, total: u64) -> f64 {
  if total == 0 {
    return 0.0;
  }
  let pct = present as f64 * 100.0 / total as f64;
  (pct * 10.0).round() / 10.0
}

/// Organisation-wide counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceOverview {
  pub total_employees: u64,
  pub total_records:   u64,
  pub present_count:   u64,
  pub absent_count:    u64,
  pub present_rate:    f64,
}

impl AttendanceOverview {
  pub fn new(total_employees: u64, total_records: u64, present_count: u64) -> Self {
    Self {
      total_employees,
      total_records,
      present_count,
      absent_count: total_records.saturating_sub(present_count),
      present_rate: present_rate(present_count, total_records),
    }
  }
}

/// Counts for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAttendanceSummary {
  pub employee_id:  String,
  pub full_name:    String,
  pub department:   String,
  pub total_days:   u64,
  pub present_days: u64,
  pub absent_days:  u64,
  pub present_rate: f64,
}

impl EmployeeAttendanceSummary {
  pub fn new(
    employee_id: String,
    full_name: String,
    department: String,
    total_days: u64,
    present_days: u64,
  ) -> Self {
    Self {
      employee_id,
      full_name,
      department,
      total_days,
      present_days,
      absent_days: total_days.saturating_sub(present_days),
      present_rate: present_rate(present_days, total_days),
    }
  }
}
