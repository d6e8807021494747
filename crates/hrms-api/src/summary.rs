//! Handlers for `/summary` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use hrms_core::{
  store::RecordStore,
  summary::{AttendanceOverview, EmployeeAttendanceSummary},
};

use crate::error::ApiError;

/// `GET /summary`
pub async fn overview<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<AttendanceOverview>, ApiError>
where
  S: RecordStore,
{
  let overview = store.overview().await.map_err(ApiError::from_store)?;
  Ok(Json(overview))
}

/// `GET /summary/employees`
pub async fn employees<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<EmployeeAttendanceSummary>>, ApiError>
where
  S: RecordStore,
{
  let summaries = store
    .employee_summaries()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(summaries))
}
