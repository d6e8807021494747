//! JSON REST API for the HRMS record store.
//!
//! Exposes an axum [`Router`] backed by any [`hrms_core::store::RecordStore`].
//! TLS, CORS, and request tracing are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = hrms_api::api_router(Arc::new(store));
//! ```

pub mod attendance;
pub mod employees;
pub mod error;
pub mod summary;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use hrms_core::store::RecordStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
    // Employees
    .route("/employees", get(employees::list::<S>).post(employees::create::<S>))
    .route(
      "/employees/{employee_id}",
      get(employees::get_one::<S>).delete(employees::delete_one::<S>),
    )
    // Attendance
    .route("/attendance", get(attendance::list::<S>).post(attendance::mark::<S>))
    .route(
      "/attendance/employee/{employee_id}",
      get(attendance::list_for_employee::<S>),
    )
    // Summaries
    .route("/summary", get(summary::overview::<S>))
    .route("/summary/employees", get(summary::employees::<S>))
    .with_state(store)
}

/// `GET /`
async fn root() -> Json<Value> { Json(json!({ "message": "HRMS API" })) }

/// `GET /health`
async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }

#[cfg(test)]
mod tests;
