use axum::extract::rejection::JsonRejection;
use crate::errors::ApiError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "songTitle, artistName, albumName, and genre are required.";

/// Track ids come in as raw path segments; anything that is not an integer
/// cannot address a row.
pub fn parse_track_id(raw: &str) -> Result<i64, ApiError> {
  raw.trim().parse::<i64>().map_err(|_| ApiError::TrackNotFoundError)
}

pub fn json_rejection(rejection: JsonRejection) -> ApiError {
  ApiError::ValidationError(rejection.body_text())
}
