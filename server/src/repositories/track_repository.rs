use anyhow::Result;
use rusqlite::{params_from_iter, types::Value, Connection, OptionalExtension, Row};
use indoc::indoc;
use crate::entities::track::{NewTrack, Track, TrackChanges};

fn map_track(row: &Row) -> rusqlite::Result<Track> {
  Ok(Track {
    track_id: row.get("trackId")?,
    song_title: row.get("songTitle")?,
    artist_name: row.get("artistName")?,
    album_name: row.get("albumName")?,
    genre: row.get("genre")?,
    duration: row.get("duration")?,
    release_year: row.get("releaseYear")?,
  })
}

pub fn get_tracks(conn: &mut Connection) -> Result<Vec<Track>> {
  let query = indoc! {"
    SELECT
      trackId,
      songTitle,
      artistName,
      albumName,
      genre,
      duration,
      releaseYear
    FROM
      tracks
    ORDER BY
      trackId
  "};
  let mut statement = conn.prepare(query)?;
  let rows = statement
    .query_map([], map_track)?
    .collect::<rusqlite::Result<Vec<Track>>>()?;
  Ok(rows)
}

pub fn get_track_by_id(track_id: i64, conn: &mut Connection) -> Result<Option<Track>> {
  let query = indoc! {"
    SELECT
      trackId,
      songTitle,
      artistName,
      albumName,
      genre,
      duration,
      releaseYear
    FROM
      tracks
    WHERE
      trackId = ?
  "};
  let mut statement = conn.prepare(query)?;
  let row = statement.query_row([track_id], map_track).optional()?;
  Ok(row)
}

pub fn add_one(track: &NewTrack, conn: &mut Connection) -> Result<Track> {
  let query = indoc! {"
    INSERT INTO tracks (
      songTitle,
      artistName,
      albumName,
      genre,
      duration,
      releaseYear
    )
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING
      trackId,
      songTitle,
      artistName,
      albumName,
      genre,
      duration,
      releaseYear
  "};
  let mut statement = conn.prepare(query)?;
  let row = statement.query_row(
    (
      &track.song_title,
      &track.artist_name,
      &track.album_name,
      &track.genre,
      track.duration,
      track.release_year,
    ),
    map_track,
  )?;
  Ok(row)
}

/// Applies `changes` to the row and returns the number of rows updated.
/// An empty change set writes nothing and updates no row.
pub fn update_by_id(track_id: i64, changes: &TrackChanges, conn: &mut Connection) -> Result<usize> {
  if changes.is_empty() {
    return Ok(0);
  }

  let mut assignments: Vec<&str> = Vec::new();
  let mut values: Vec<Value> = Vec::new();

  let text_columns = [
    ("songTitle = ?", &changes.song_title),
    ("artistName = ?", &changes.artist_name),
    ("albumName = ?", &changes.album_name),
    ("genre = ?", &changes.genre),
  ];
  for (assignment, change) in text_columns {
    if let Some(value) = change {
      assignments.push(assignment);
      values.push(value.clone().map_or(Value::Null, Value::Text));
    }
  }

  let integer_columns = [
    ("duration = ?", &changes.duration),
    ("releaseYear = ?", &changes.release_year),
  ];
  for (assignment, change) in integer_columns {
    if let Some(value) = change {
      assignments.push(assignment);
      values.push(value.map_or(Value::Null, Value::Integer));
    }
  }

  values.push(Value::Integer(track_id));

  let query = format!("UPDATE tracks SET {} WHERE trackId = ?", assignments.join(", "));
  let rows_updated = conn.execute(&query, params_from_iter(values))?;
  Ok(rows_updated)
}

pub fn delete_by_id(track_id: i64, conn: &mut Connection) -> Result<usize> {
  let query = indoc! {"
    DELETE FROM tracks
    WHERE
      trackId = ?
  "};
  let rows_deleted = conn.execute(query, [track_id])?;
  Ok(rows_deleted)
}
