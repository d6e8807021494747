//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | Newest first |
//! | `POST`   | `/employees` | Body: [`NewEmployee`]; returns 201 + stored employee |
//! | `GET`    | `/employees/:employee_id` | 404 if not found |
//! | `DELETE` | `/employees/:employee_id` | Also removes the employee's attendance |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use hrms_core::{
  employee::{Employee, NewEmployee},
  store::RecordStore,
};
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: RecordStore,
{
  let employees = store.list_employees().await.map_err(ApiError::from_store)?;
  Ok(Json(employees))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored [`Employee`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewEmployee>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let Json(body) = body?;
  let employee = store
    .create_employee(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:employee_id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Json<Employee>, ApiError>
where
  S: RecordStore,
{
  let employee = store
    .get_employee(&employee_id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("Employee not found: {employee_id}")))?;
  Ok(Json(employee))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:employee_id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
{
  let deleted = store
    .delete_employee(&employee_id)
    .await
    .map_err(ApiError::from_store)?;
  if !deleted {
    return Err(ApiError::NotFound(format!(
      "Employee not found: {employee_id}"
    )));
  }
  Ok(Json(json!({ "message": "Deleted" })))
}
