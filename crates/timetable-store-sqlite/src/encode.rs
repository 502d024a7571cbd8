//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; the lesson collection is stored
//! as a compact JSON array in the wire format of
//! [`timetable_core::lesson::Lesson`].

use chrono::{DateTime, Utc};
use timetable_core::lesson::Lesson;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Lessons ─────────────────────────────────────────────────────────────────

pub fn encode_lessons(lessons: &[Lesson]) -> Result<String> {
  Ok(serde_json::to_string(lessons)?)
}

pub fn decode_lessons(s: &str) -> Result<Vec<Lesson>> {
  Ok(serde_json::from_str(s)?)
}
