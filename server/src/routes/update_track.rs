use axum::{
  extract::{rejection::JsonRejection, Path, State},
  Json,
};
use std::sync::Arc;
use crate::{
  entities::track::{Track, TrackChanges},
  errors::ApiError,
  repositories::track_repository::{get_track_by_id, update_by_id},
  utils::{json_rejection, parse_track_id},
  AppState,
};
use axum_macros::debug_handler;

#[debug_handler]
pub async fn route(
  Path(track_id): Path<String>,
  State(state): State<Arc<AppState>>,
  payload: Result<Json<TrackChanges>, JsonRejection>,
) -> Result<Json<Track>, ApiError> {
  let track_id = parse_track_id(&track_id)?;
  let Json(changes) = payload.map_err(json_rejection)?;

  let blanked = changes.blanked_required_fields();
  if !blanked.is_empty() {
    return Err(ApiError::ValidationError(format!("{} cannot be empty.", blanked.join(", "))));
  }

  let mut conn = state.pool.get()?;

  let rows_updated = update_by_id(track_id, &changes, &mut conn)?;
  if rows_updated == 0 {
    return Err(ApiError::TrackNotFoundError);
  }

  // The row can vanish between the write and the re-read.
  match get_track_by_id(track_id, &mut conn)? {
    Some(track) => {
      tracing::info!(message = "track updated", track_id = track_id);
      Ok(Json(track))
    }
    None => Err(ApiError::TrackNotFoundError),
  }
}
