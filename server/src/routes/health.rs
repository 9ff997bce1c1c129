use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
  message: &'static str,
}

pub async fn route() -> Json<HealthResponse> {
  Json(HealthResponse { message: "Music ORM API is running." })
}
