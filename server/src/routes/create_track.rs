use axum::{
  extract::{rejection::JsonRejection, State},
  http::StatusCode,
  Json,
};
use serde::Deserialize;
use std::sync::Arc;
use crate::{
  entities::track::{NewTrack, Track},
  errors::ApiError,
  repositories::track_repository::add_one,
  utils::{json_rejection, REQUIRED_FIELDS_MESSAGE},
  AppState,
};
use axum_macros::debug_handler;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackRequest {
  #[validate(length(min = 1))]
  song_title: Option<String>,
  #[validate(length(min = 1))]
  artist_name: Option<String>,
  #[validate(length(min = 1))]
  album_name: Option<String>,
  #[validate(length(min = 1))]
  genre: Option<String>,
  duration: Option<i64>,
  release_year: Option<i64>,
}

impl CreateTrackRequest {
  // Presence is decided by the match; the validator only rejects blanks.
  fn into_new_track(self) -> Result<NewTrack, ApiError> {
    self.validate().map_err(|_| ApiError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_owned()))?;

    match (self.song_title, self.artist_name, self.album_name, self.genre) {
      (Some(song_title), Some(artist_name), Some(album_name), Some(genre)) => Ok(NewTrack {
        song_title,
        artist_name,
        album_name,
        genre,
        duration: self.duration,
        release_year: self.release_year,
      }),
      _ => Err(ApiError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_owned())),
    }
  }
}

#[debug_handler]
pub async fn route(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<CreateTrackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Track>), ApiError> {
  let Json(payload) = payload.map_err(json_rejection)?;
  let new_track = payload.into_new_track()?;

  let track = {
    let mut conn = state.pool.get()?;
    add_one(&new_track, &mut conn)?
  };

  tracing::info!(
    message = "track created",
    track_id = track.track_id,
    song_title = track.song_title,
    artist_name = track.artist_name,
  );

  Ok((StatusCode::CREATED, Json(track)))
}
