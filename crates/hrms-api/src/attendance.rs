//! Handlers for `/attendance` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/attendance` | Every record, newest date first |
//! | `POST` | `/attendance` | Body: `{"employee_id", "date": "YYYY-MM-DD", "status": "Present"\|"Absent"}` |
//! | `GET`  | `/attendance/employee/:employee_id` | 404 if the employee does not exist |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use hrms_core::{
  attendance::{AttendanceRecord, MarkAttendance},
  store::RecordStore,
};

use crate::error::ApiError;

/// `GET /attendance`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError>
where
  S: RecordStore,
{
  let records = store.list_attendance().await.map_err(ApiError::from_store)?;
  Ok(Json(records))
}

/// `POST /attendance` — returns 201 + the stored [`AttendanceRecord`].
///
/// `status` and `date` arrive as plain strings so that an unknown status or
/// a malformed date is reported by the store's ordered checks rather than
/// rejected wholesale by the JSON extractor.
pub async fn mark<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<MarkAttendance>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let Json(body) = body?;
  let record = store
    .mark_attendance(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /attendance/employee/:employee_id`
pub async fn list_for_employee<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError>
where
  S: RecordStore,
{
  let records = store
    .list_attendance_for(&employee_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(records))
}
