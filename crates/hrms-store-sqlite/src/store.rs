//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::{NaiveDate, Utc};
use rusqlite::OptionalExtension as _;
use tracing::{debug, warn};
use uuid::Uuid;

use hrms_core::{
  attendance::{AttendanceRecord, MarkAttendance},
  employee::{Employee, NewEmployee},
  store::RecordStore,
  summary::{AttendanceOverview, EmployeeAttendanceSummary},
  validate,
};

use crate::{
  Error, Result,
  constraint::{Violation, violation},
  encode::{
    RawAttendance, RawEmployee, RawEmployeeTally, count, encode_date, encode_dt,
    encode_status, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An HRMS record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn employee_exists(&self, employee_id: &str) -> Result<bool> {
    let id = employee_id.to_owned();
    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM employees WHERE employee_id = ?1",
              rusqlite::params![id],
              |_| Ok(()),
            )
            .optional()?
            .is_some(),
        )
      })
      .await?;
    Ok(exists)
  }

  /// Returns `(id_taken, email_taken)`.
  async fn employee_conflicts(
    &self,
    employee_id: &str,
    email: &str,
  ) -> Result<(bool, bool)> {
    let id = employee_id.to_owned();
    let email = email.to_owned();

    let taken = self
      .conn
      .call(move |conn| {
        let id_taken = conn
          .query_row(
            "SELECT 1 FROM employees WHERE employee_id = ?1",
            rusqlite::params![id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();

        let email_taken = conn
          .query_row(
            "SELECT 1 FROM employees WHERE email = ?1",
            rusqlite::params![email],
            |_| Ok(()),
          )
          .optional()?
          .is_some();

        Ok((id_taken, email_taken))
      })
      .await?;
    Ok(taken)
  }

  async fn attendance_exists(
    &self,
    employee_id: &str,
    date: NaiveDate,
  ) -> Result<bool> {
    let id = employee_id.to_owned();
    let date_str = encode_date(date);

    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM attendance WHERE employee_id = ?1 AND date = ?2",
              rusqlite::params![id, date_str],
              |_| Ok(()),
            )
            .optional()?
            .is_some(),
        )
      })
      .await?;
    Ok(exists)
  }

  /// Insert a fully-built [`Employee`] in its own transaction.
  ///
  /// Unique-constraint violations become `DuplicateId` / `DuplicateEmail`.
  pub(crate) async fn insert_employee(&self, employee: &Employee) -> Result<()> {
    let id_str     = employee.employee_id.clone();
    let full_name  = employee.full_name.clone();
    let email      = employee.email.clone();
    let department = employee.department.clone();
    let at_str     = encode_dt(employee.created_at);

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO employees (employee_id, full_name, email, department, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, full_name, email, department, at_str],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await;

    outcome.map_err(|e| match violation(&e) {
      Some(Violation::EmployeeId) => {
        warn!(employee_id = %employee.employee_id, "employee id taken at insert");
        hrms_core::Error::DuplicateId(employee.employee_id.clone()).into()
      }
      Some(Violation::Email) => {
        warn!(email = %employee.email, "email taken at insert");
        hrms_core::Error::DuplicateEmail(employee.email.clone()).into()
      }
      _ => Error::Database(e),
    })
  }

  /// Insert a fully-built [`AttendanceRecord`] in its own transaction.
  ///
  /// A second record for the same day becomes `DuplicateAttendance`; a
  /// record for an employee deleted in the meantime becomes
  /// `EmployeeNotFound`.
  pub(crate) async fn insert_attendance(
    &self,
    record: &AttendanceRecord,
  ) -> Result<()> {
    let id_str       = encode_uuid(record.attendance_id);
    let employee_id  = record.employee_id.clone();
    let date_str     = encode_date(record.date);
    let status_str   = encode_status(record.status);
    let at_str       = encode_dt(record.created_at);

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO attendance (attendance_id, employee_id, date, status, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, employee_id, date_str, status_str, at_str],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await;

    outcome.map_err(|e| match violation(&e) {
      Some(Violation::AttendanceDay) => {
        warn!(
          employee_id = %record.employee_id,
          date = %record.date,
          "attendance day taken at insert"
        );
        hrms_core::Error::DuplicateAttendance {
          employee_id: record.employee_id.clone(),
          date:        record.date,
        }
        .into()
      }
      Some(Violation::MissingEmployee) => {
        hrms_core::Error::EmployeeNotFound(record.employee_id.clone()).into()
      }
      _ => Error::Database(e),
    })
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn create_employee(&self, input: NewEmployee) -> Result<Employee> {
    let input = validate::validate_employee(input)?;

    let (id_taken, email_taken) = self
      .employee_conflicts(&input.employee_id, &input.email)
      .await?;
    if id_taken {
      return Err(hrms_core::Error::DuplicateId(input.employee_id).into());
    }
    if email_taken {
      return Err(hrms_core::Error::DuplicateEmail(input.email).into());
    }

    let employee = Employee {
      employee_id: input.employee_id,
      full_name:   input.full_name,
      email:       input.email,
      department:  input.department,
      created_at:  Utc::now(),
    };

    self.insert_employee(&employee).await?;
    debug!(employee_id = %employee.employee_id, "employee created");
    Ok(employee)
  }

  async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>> {
    let id = employee_id.to_owned();

    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {} FROM employees WHERE employee_id = ?1",
                RawEmployee::COLUMNS
              ),
              rusqlite::params![id],
              RawEmployee::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawEmployee::into_employee).transpose()
  }

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    let raws: Vec<RawEmployee> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM employees ORDER BY created_at DESC, rowid DESC",
          RawEmployee::COLUMNS
        ))?;
        let rows = stmt
          .query_map([], RawEmployee::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }

  async fn delete_employee(&self, employee_id: &str) -> Result<bool> {
    let id = employee_id.to_owned();

    let (deleted, cascaded): (usize, i64) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let cascaded: i64 = tx.query_row(
          "SELECT COUNT(*) FROM attendance WHERE employee_id = ?1",
          rusqlite::params![id],
          |r| r.get(0),
        )?;
        // attendance rows go with it via ON DELETE CASCADE
        let deleted = tx.execute(
          "DELETE FROM employees WHERE employee_id = ?1",
          rusqlite::params![id],
        )?;
        tx.commit()?;
        Ok((deleted, cascaded))
      })
      .await?;

    if deleted > 0 {
      debug!(employee_id, cascaded, "employee deleted");
    }
    Ok(deleted > 0)
  }

  // ── Attendance ────────────────────────────────────────────────────────────

  async fn mark_attendance(&self, input: MarkAttendance) -> Result<AttendanceRecord> {
    let status = validate::parse_status(&input.status)?;

    if !self.employee_exists(&input.employee_id).await? {
      return Err(hrms_core::Error::EmployeeNotFound(input.employee_id).into());
    }

    let date = validate::parse_date(&input.date)?;

    if self.attendance_exists(&input.employee_id, date).await? {
      return Err(
        hrms_core::Error::DuplicateAttendance {
          employee_id: input.employee_id,
          date,
        }
        .into(),
      );
    }

    let record = AttendanceRecord {
      attendance_id: Uuid::new_v4(),
      employee_id: input.employee_id,
      date,
      status,
      created_at: Utc::now(),
    };

    self.insert_attendance(&record).await?;
    debug!(
      employee_id = %record.employee_id,
      date = %record.date,
      status = %record.status,
      "attendance marked"
    );
    Ok(record)
  }

  async fn list_attendance_for(
    &self,
    employee_id: &str,
  ) -> Result<Vec<AttendanceRecord>> {
    let id = employee_id.to_owned();

    let raws: Option<Vec<RawAttendance>> = self
      .conn
      .call(move |conn| {
        let exists = conn
          .query_row(
            "SELECT 1 FROM employees WHERE employee_id = ?1",
            rusqlite::params![id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !exists {
          return Ok(None);
        }

        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM attendance
           WHERE employee_id = ?1
           ORDER BY date DESC, created_at DESC, rowid DESC",
          RawAttendance::COLUMNS
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![id], RawAttendance::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(Some(rows))
      })
      .await?;

    let raws = raws.ok_or_else(|| {
      Error::Core(hrms_core::Error::EmployeeNotFound(employee_id.to_owned()))
    })?;
    raws.into_iter().map(RawAttendance::into_record).collect()
  }

  async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
    let raws: Vec<RawAttendance> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM attendance ORDER BY date DESC, created_at DESC, rowid DESC",
          RawAttendance::COLUMNS
        ))?;
        let rows = stmt
          .query_map([], RawAttendance::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAttendance::into_record).collect()
  }

  // ── Summaries ─────────────────────────────────────────────────────────────

  async fn overview(&self) -> Result<AttendanceOverview> {
    let (employees, records, present): (i64, i64, i64) = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT
             (SELECT COUNT(*) FROM employees),
             (SELECT COUNT(*) FROM attendance),
             (SELECT COUNT(*) FROM attendance WHERE status = 'Present')",
          [],
          |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )?)
      })
      .await?;

    Ok(AttendanceOverview::new(
      count(employees),
      count(records),
      count(present),
    ))
  }

  async fn employee_summaries(&self) -> Result<Vec<EmployeeAttendanceSummary>> {
    let raws: Vec<RawEmployeeTally> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             e.employee_id, e.full_name, e.department,
             COUNT(a.attendance_id),
             COALESCE(SUM(CASE WHEN a.status = 'Present' THEN 1 ELSE 0 END), 0)
           FROM employees e
           LEFT JOIN attendance a ON a.employee_id = e.employee_id
           GROUP BY e.employee_id
           ORDER BY e.created_at DESC, e.rowid DESC",
        )?;
        let rows = stmt
          .query_map([], RawEmployeeTally::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(raws.into_iter().map(RawEmployeeTally::into_summary).collect())
  }
}
