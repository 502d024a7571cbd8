//! [`SqliteStore`] — the SQLite implementation of [`ScheduleStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use timetable_core::{lesson::Lesson, store::ScheduleStore};
use tracing::debug;

use crate::{
  Result,
  encode::{decode_dt, decode_lessons, encode_dt, encode_lessons},
  schema::SCHEMA,
};

/// Key the lesson collection is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "lessons";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A key-value store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
  key:  String,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, key: DEFAULT_KEY.to_owned() };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, key: DEFAULT_KEY.to_owned() };
    store.init_schema().await?;
    Ok(store)
  }

  /// Use `key` for the lesson collection instead of [`DEFAULT_KEY`].
  pub fn with_key(mut self, key: impl Into<String>) -> Self {
    self.key = key.into();
    self
  }

  /// The key the lesson collection is stored under.
  pub fn key(&self) -> &str { &self.key }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Raw key-value access ──────────────────────────────────────────────────

  /// Read the raw value under `key`, if any.
  pub async fn get(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();
    let value: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM entries WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(value)
  }

  /// Write `value` under `key`, replacing any previous value.
  pub async fn put(&self, key: &str, value: String) -> Result<()> {
    let key = key.to_owned();
    let at_str = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO entries (key, value, updated_at) VALUES (?1, ?2, ?3)
           ON CONFLICT(key) DO UPDATE SET
             value      = excluded.value,
             updated_at = excluded.updated_at",
          rusqlite::params![key, value, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Delete the value under `key`. Returns whether anything was removed.
  pub async fn delete(&self, key: &str) -> Result<bool> {
    let key = key.to_owned();
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM entries WHERE key = ?1", rusqlite::params![key])?)
      })
      .await?;
    Ok(removed > 0)
  }

  /// When the value under `key` was last written.
  pub async fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
    let key = key.to_owned();
    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT updated_at FROM entries WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    raw.as_deref().map(decode_dt).transpose()
  }
}

// ─── ScheduleStore impl ──────────────────────────────────────────────────────

impl ScheduleStore for SqliteStore {
  type Error = crate::Error;

  async fn load(&self) -> Result<Vec<Lesson>> {
    match self.get(&self.key).await? {
      Some(raw) => {
        let lessons = decode_lessons(&raw)?;
        debug!(key = %self.key, count = lessons.len(), "loaded lessons");
        Ok(lessons)
      }
      None => {
        debug!(key = %self.key, "no saved lessons");
        Ok(Vec::new())
      }
    }
  }

  async fn save(&self, lessons: &[Lesson]) -> Result<()> {
    let raw = encode_lessons(lessons)?;
    self.put(&self.key, raw).await?;
    debug!(key = %self.key, count = lessons.len(), "saved lessons");
    Ok(())
  }
}
