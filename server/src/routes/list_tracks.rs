use axum::{extract::State, Json};
use crate::{entities::track::Track, errors::ApiError, repositories::track_repository::get_tracks, AppState};
use std::sync::Arc;

pub async fn route(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Track>>, ApiError> {
  let tracks = {
    let mut conn = state.pool.get()?;
    get_tracks(&mut conn)?
  };

  Ok(Json(tracks))
}
