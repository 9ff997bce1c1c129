use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
  pub track_id: i64,
  pub song_title: String,
  pub artist_name: String,
  pub album_name: String,
  pub genre: String,
  pub duration: Option<i64>,
  pub release_year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
  pub song_title: String,
  pub artist_name: String,
  pub album_name: String,
  pub genre: String,
  pub duration: Option<i64>,
  pub release_year: Option<i64>,
}

/// Partial update of a track. `None` leaves a column untouched; for the
/// nullable columns `Some(None)` clears the stored value.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackChanges {
  #[serde(default, deserialize_with = "present")]
  pub song_title: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub artist_name: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub album_name: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub genre: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub duration: Option<Option<i64>>,
  #[serde(default, deserialize_with = "present")]
  pub release_year: Option<Option<i64>>,
}

impl TrackChanges {
  pub fn is_empty(&self) -> bool {
    self.song_title.is_none()
      && self.artist_name.is_none()
      && self.album_name.is_none()
      && self.genre.is_none()
      && self.duration.is_none()
      && self.release_year.is_none()
  }

  /// Names of required columns the update would null out or blank.
  pub fn blanked_required_fields(&self) -> Vec<&'static str> {
    [
      ("songTitle", &self.song_title),
      ("artistName", &self.artist_name),
      ("albumName", &self.album_name),
      ("genre", &self.genre),
    ]
    .into_iter()
    .filter(|(_, value)| matches!(value, Some(None)) || matches!(value, Some(Some(s)) if s.is_empty()))
    .map(|(name, _)| name)
    .collect()
  }
}

// Distinguishes a field sent as `null` from a missing one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}
