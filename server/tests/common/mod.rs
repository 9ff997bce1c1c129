use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use http_body_util::BodyExt;
use serde_json::Value;
use server::{app, db::init_db, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

/// Build the full router over a fresh database in a temporary directory.
///
/// The `TempDir` must outlive the router.
pub fn build_test_app() -> (Router, TempDir) {
  let (app, _, temp_dir) = build_test_app_with_pool();
  (app, temp_dir)
}

/// Same as `build_test_app`, also handing back the pool so a test can
/// tamper with storage underneath the router.
pub fn build_test_app_with_pool() -> (Router, Pool<SqliteConnectionManager>, TempDir) {
  let temp_dir = TempDir::new().unwrap();
  let pool = init_db(&temp_dir.path().join("test.db")).unwrap();
  let app = app(Arc::new(AppState::new(pool.clone())));
  (app, pool, temp_dir)
}

/// Send a request and return the status and the parsed JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let request = match body {
    Some(body) => builder
      .header(CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  let json = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
  send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
  send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
  send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
  send(app, Method::DELETE, uri, None).await
}
