//! SQL schema for the HRMS SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` is a per-connection setting; the store holds exactly one
/// connection, so enabling it here covers every statement.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS employees (
    employee_id TEXT PRIMARY KEY,     -- externally assigned business key
    full_name   TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    department  TEXT NOT NULL,
    created_at  TEXT NOT NULL         -- RFC 3339 UTC; server-assigned
);

-- At most one row per employee per calendar day.
-- Rows are never updated; they go away only with their employee.
CREATE TABLE IF NOT EXISTS attendance (
    attendance_id TEXT PRIMARY KEY,
    employee_id   TEXT NOT NULL
                  REFERENCES employees(employee_id) ON DELETE CASCADE,
    date          TEXT NOT NULL,      -- YYYY-MM-DD
    status        TEXT NOT NULL CHECK (status IN ('Present', 'Absent')),
    created_at    TEXT NOT NULL,
    UNIQUE (employee_id, date)
);

CREATE INDEX IF NOT EXISTS employees_created_idx ON employees(created_at);
CREATE INDEX IF NOT EXISTS attendance_date_idx   ON attendance(date);

PRAGMA user_version = 1;
";
