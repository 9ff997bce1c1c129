use axum::{
  response::{IntoResponse, Response},
  http::StatusCode,
  Json,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
  message: String,
  name: &'static str,
  status_code: u16
}

pub enum ApiError {
  TrackNotFoundError,
  ValidationError(String),
  UnknownError(anyhow::Error),
}

impl ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::TrackNotFoundError => StatusCode::NOT_FOUND,
      ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
      ApiError::UnknownError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn name(&self) -> &'static str {
    match self {
      ApiError::TrackNotFoundError => "TrackNotFound",
      ApiError::ValidationError(_) => "ValidationError",
      ApiError::UnknownError(_) => "UnknownError",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status_code = self.status_code();
    let name = self.name();

    let message = match self {
      ApiError::TrackNotFoundError => "Track not found.".to_owned(),
      ApiError::ValidationError(err_msg) => err_msg,
      ApiError::UnknownError(err) => {
        // Storage details stay in the log.
        tracing::error!(message = "unknown error happened", error = format!("{:#}", err));
        "Something bad happened when processing your request".to_owned()
      }
    };

    let body = ApiErrorResponse {
      message,
      name,
      status_code: status_code.as_u16(),
    };

    (status_code, Json(body)).into_response()
  }
}

impl<E> From<E> for ApiError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    ApiError::UnknownError(err.into())
  }
}
