//! Router tests against an in-memory `SqliteStore`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Method, Request, StatusCode, header},
};
use hrms_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  api_router(Arc::new(store))
}

async fn send(
  app: &Router,
  method: Method,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(b) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(b.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let res = app.clone().oneshot(req).await.unwrap();
  let status = res.status();
  let bytes = axum::body::to_bytes(res.into_body(), 1024 * 1024)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
  };
  (status, value)
}

fn employee(id: &str, email: &str) -> Value {
  json!({
    "employee_id": id,
    "full_name": "Ada Lovelace",
    "email": email,
    "department": "Engineering",
  })
}

fn mark(id: &str, date: &str, status: &str) -> Value {
  json!({ "employee_id": id, "date": date, "status": status })
}

#[tokio::test]
async fn root_and_health() {
  let app = app().await;

  let (status, body) = send(&app, Method::GET, "/", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "HRMS API");

  let (status, body) = send(&app, Method::GET, "/health", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn employee_lifecycle() {
  let app = app().await;

  let (status, body) = send(
    &app,
    Method::POST,
    "/employees",
    Some(employee("EMP001", "ada@example.com")),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["employee_id"], "EMP001");
  assert!(body["created_at"].is_string());

  let (status, body) = send(&app, Method::GET, "/employees/EMP001", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["email"], "ada@example.com");

  let (status, body) = send(&app, Method::GET, "/employees", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (status, body) =
    send(&app, Method::DELETE, "/employees/EMP001", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Deleted");

  let (status, body) = send(&app, Method::GET, "/employees", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn employee_errors_map_to_statuses() {
  let app = app().await;
  send(&app, Method::POST, "/employees", Some(employee("EMP001", "ada@example.com")))
    .await;

  let (status, body) = send(
    &app,
    Method::POST,
    "/employees",
    Some(employee("EMP001", "other@example.com")),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert!(body["error"].as_str().unwrap().contains("Employee ID"));

  let (status, body) = send(
    &app,
    Method::POST,
    "/employees",
    Some(employee("EMP002", "ada@example.com")),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert!(body["error"].as_str().unwrap().contains("Email"));

  let (status, _) = send(
    &app,
    Method::POST,
    "/employees",
    Some(employee("EMP003", "nope")),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(&app, Method::GET, "/employees/EMP404", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _) = send(&app, Method::DELETE, "/employees/EMP404", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attendance_flow() {
  let app = app().await;
  send(&app, Method::POST, "/employees", Some(employee("EMP001", "ada@example.com")))
    .await;

  let (status, body) = send(
    &app,
    Method::POST,
    "/attendance",
    Some(mark("EMP001", "2024-01-15", "Present")),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["date"], "2024-01-15");
  assert_eq!(body["status"], "Present");

  let (status, _) = send(
    &app,
    Method::POST,
    "/attendance",
    Some(mark("EMP001", "2024-01-15", "Absent")),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);

  send(&app, Method::POST, "/attendance", Some(mark("EMP001", "2024-01-16", "Absent")))
    .await;

  let (status, body) =
    send(&app, Method::GET, "/attendance/employee/EMP001", None).await;
  assert_eq!(status, StatusCode::OK);
  let dates: Vec<_> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["date"].as_str().unwrap().to_owned())
    .collect();
  assert_eq!(dates, ["2024-01-16", "2024-01-15"]);

  let (status, body) = send(&app, Method::GET, "/attendance", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn attendance_errors_map_to_statuses() {
  let app = app().await;
  send(&app, Method::POST, "/employees", Some(employee("EMP001", "ada@example.com")))
    .await;

  let cases = [
    (mark("EMP001", "2024-01-15", "Late"), StatusCode::BAD_REQUEST),
    (mark("EMP404", "2024-01-15", "Present"), StatusCode::NOT_FOUND),
    (mark("EMP404", "not-a-date", "Present"), StatusCode::NOT_FOUND),
    (mark("EMP001", "01/15/2024", "Present"), StatusCode::BAD_REQUEST),
  ];
  for (body, expected) in cases {
    let (status, _) =
      send(&app, Method::POST, "/attendance", Some(body.clone())).await;
    assert_eq!(status, expected, "{body}");
  }

  let (status, _) =
    send(&app, Method::GET, "/attendance/employee/EMP404", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn summaries() {
  let app = app().await;
  send(&app, Method::POST, "/employees", Some(employee("EMP001", "ada@example.com")))
    .await;
  send(&app, Method::POST, "/employees", Some(employee("EMP002", "bob@example.com")))
    .await;
  for (d, s) in [("2024-01-15", "Present"), ("2024-01-16", "Absent")] {
    send(&app, Method::POST, "/attendance", Some(mark("EMP001", d, s))).await;
  }

  let (status, body) = send(&app, Method::GET, "/summary", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["total_employees"], 2);
  assert_eq!(body["total_records"], 2);
  assert_eq!(body["present_count"], 1);
  assert_eq!(body["present_rate"], 50.0);

  let (status, body) = send(&app, Method::GET, "/summary/employees", None).await;
  assert_eq!(status, StatusCode::OK);
  let rows = body.as_array().unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0]["employee_id"], "EMP002");
  assert_eq!(rows[0]["total_days"], 0);
  assert_eq!(rows[1]["present_days"], 1);
  assert_eq!(rows[1]["absent_days"], 1);
}

#[tokio::test]
async fn unusable_bodies_are_bad_requests() {
  let app = app().await;
  send(&app, Method::POST, "/employees", Some(employee("EMP001", "ada@example.com")))
    .await;

  let cases = [
    (
      "/employees",
      json!({
        "employee_id": "EMP002",
        "email": "bob@example.com",
        "department": "Engineering",
      }),
    ),
    ("/employees", json!({ "employee_id": 7 })),
    ("/attendance", json!({ "employee_id": "EMP001", "date": "2024-01-15" })),
    (
      "/attendance",
      json!({ "employee_id": "EMP001", "date": 20240115, "status": "Present" }),
    ),
  ];
  for (uri, body) in cases {
    let (status, res) =
      send(&app, Method::POST, uri, Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
    assert!(res["error"].is_string(), "{uri} {body} -> {res}");
  }

  let req = Request::builder()
    .method(Method::POST)
    .uri("/attendance")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{not json"))
    .unwrap();
  let res = app.clone().oneshot(req).await.unwrap();
  assert_eq!(res.status(), StatusCode::BAD_REQUEST);

  let (_, body) = send(&app, Method::GET, "/employees", None).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  let (_, body) = send(&app, Method::GET, "/attendance", None).await;
  assert!(body.as_array().unwrap().is_empty());
}
