use axum::{extract::{Path, State}, http::StatusCode};
use crate::{errors::ApiError, repositories::track_repository::delete_by_id, utils::parse_track_id, AppState};
use std::sync::Arc;

pub async fn route(Path(track_id): Path<String>, State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
  let track_id = parse_track_id(&track_id)?;

  let rows_deleted = {
    let mut conn = state.pool.get()?;
    delete_by_id(track_id, &mut conn)?
  };

  if rows_deleted == 0 {
    return Err(ApiError::TrackNotFoundError);
  }

  tracing::info!(message = "track deleted", track_id = track_id);

  Ok(StatusCode::NO_CONTENT)
}
