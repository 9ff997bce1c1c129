use std::path::Path;
use anyhow::{Context, Result};
use indoc::indoc;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

const CREATE_TRACKS_TABLE: &str = indoc! {"
  CREATE TABLE IF NOT EXISTS tracks (
    trackId INTEGER PRIMARY KEY AUTOINCREMENT,
    songTitle VARCHAR(255) NOT NULL,
    artistName VARCHAR(255) NOT NULL,
    albumName VARCHAR(255) NOT NULL,
    genre VARCHAR(255) NOT NULL,
    duration INTEGER,
    releaseYear INTEGER
  )
"};

pub fn init_db(path: &Path) -> Result<Pool<SqliteConnectionManager>> {
  ensure_parent_dir(path)?;

  let manager = SqliteConnectionManager::file(path).with_init(set_pragma);
  let pool = r2d2::Pool::builder()
    .max_size(30)
    .build(manager)?;

  let mut conn = pool.get()?;
  sync_schema(&mut conn)?;

  Ok(pool)
}

/// One-shot schema sync: open, verify, create the table if missing, close.
pub fn setup_database(path: &Path) -> Result<()> {
  ensure_parent_dir(path)?;

  let mut conn = Connection::open(path)
    .with_context(|| format!("cannot open database at {}", path.display()))?;

  verify_connection(&conn)?;
  tracing::info!(message = "connection to tracks database established", path = %path.display());

  sync_schema(&mut conn)?;
  tracing::info!(message = "tracks table synced successfully");

  conn.close().map_err(|(_, err)| err)?;
  tracing::info!(message = "database connection closed after setup");

  Ok(())
}

/// Runs on every pooled connection; `synchronous` and `temp_store` do not
/// persist in the database file.
pub fn set_pragma(conn: &mut Connection) -> rusqlite::Result<()> {
  conn.pragma_update(None, "journal_mode", "WAL")?;
  conn.pragma_update(None, "synchronous", "NORMAL")?;
  conn.pragma_update(None, "temp_store", "MEMORY")?;
  Ok(())
}

pub fn sync_schema(conn: &mut Connection) -> Result<()> {
  conn.execute_batch(CREATE_TRACKS_TABLE)?;
  Ok(())
}

pub fn verify_connection(conn: &Connection) -> Result<()> {
  conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
  Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("cannot create directory {}", parent.display()))?;
  }
  Ok(())
}
