use axum::{extract::{Path, State}, Json};
use crate::{
  entities::track::Track,
  errors::ApiError,
  repositories::track_repository::get_track_by_id,
  utils::parse_track_id,
  AppState,
};
use std::sync::Arc;

pub async fn route(Path(track_id): Path<String>, State(state): State<Arc<AppState>>) -> Result<Json<Track>, ApiError> {
  let track_id = parse_track_id(&track_id)?;

  let maybe_track = {
    let mut conn = state.pool.get()?;
    get_track_by_id(track_id, &mut conn)?
  };

  match maybe_track {
    Some(track) => Ok(Json(track)),
    None => Err(ApiError::TrackNotFoundError),
  }
}
