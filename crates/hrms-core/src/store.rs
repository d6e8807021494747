//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `hrms-store-sqlite`).
//! Higher layers (`hrms-api`, `hrms-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  Classify,
  attendance::{AttendanceRecord, MarkAttendance},
  employee::{Employee, NewEmployee},
  summary::{AttendanceOverview, EmployeeAttendanceSummary},
};

/// Abstraction over an HRMS record store backend.
///
/// Every mutation is a single atomic unit. Preconditions are checked before
/// the write; a uniqueness violation the backend only detects at commit time
/// must be reported as the same [`crate::Error`] variant the pre-check would
/// have produced.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Classify + Send + Sync + 'static;

  // ── Employees ─────────────────────────────────────────────────────────

  /// Validate and persist a new employee. `created_at` is set by the store.
  ///
  /// Fails with `Validation`, then `DuplicateId`, then `DuplicateEmail`, in
  /// that order of precedence.
  fn create_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get_employee<'a>(
    &'a self,
    employee_id: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// All employees, most recently created first.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Delete an employee together with all of their attendance records.
  /// Returns `false` if no such employee existed.
  fn delete_employee<'a>(
    &'a self,
    employee_id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Attendance ────────────────────────────────────────────────────────

  /// Mark one day of attendance for an employee.
  ///
  /// Checks run in this order, and the first failure is returned:
  /// status, employee existence, date format, existing record for the day.
  fn mark_attendance(
    &self,
    input: MarkAttendance,
  ) -> impl Future<Output = Result<AttendanceRecord, Self::Error>> + Send + '_;

  /// Attendance for one employee, newest date first. Fails with
  /// `EmployeeNotFound` if the employee does not exist.
  fn list_attendance_for<'a>(
    &'a self,
    employee_id: &'a str,
  ) -> impl Future<Output = Result<Vec<AttendanceRecord>, Self::Error>> + Send + 'a;

  /// Every attendance record, newest date first.
  fn list_attendance(
    &self,
  ) -> impl Future<Output = Result<Vec<AttendanceRecord>, Self::Error>> + Send + '_;

  // ── Summaries ─────────────────────────────────────────────────────────

  fn overview(
    &self,
  ) -> impl Future<Output = Result<AttendanceOverview, Self::Error>> + Send + '_;

  /// One summary per employee, in the same order as
  /// [`RecordStore::list_employees`]. Employees without records report zeros.
  fn employee_summaries(
    &self,
  ) -> impl Future<Output = Result<Vec<EmployeeAttendanceSummary>, Self::Error>>
  + Send
  + '_;
}
