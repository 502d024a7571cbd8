//! Error types for `timetable-core`.

use thiserror::Error;

use crate::lesson::{ClockTime, LessonId, Weekday};

/// A clock-time string that is not strict, zero-padded `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
  #[error("expected zero-padded HH:MM, got {0:?}")]
  Format(String),

  #[error("hour out of range in {0:?}")]
  Hour(String),

  #[error("minute out of range in {0:?}")]
  Minute(String),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("lesson not found: {0}")]
  LessonNotFound(LessonId),

  #[error("duplicate lesson id: {0}")]
  DuplicateId(LessonId),

  /// The candidate overlaps existing lessons on at least one shared day.
  #[error("Schedule conflict detected! Overlaps with: {}", .names.join(", "))]
  Conflict {
    ids:   Vec<LessonId>,
    names: Vec<String>,
  },

  #[error("invalid time: {0}")]
  Time(#[from] TimeError),

  #[error("start time {start} must be before end time {end}")]
  InvalidTimeRange { start: ClockTime, end: ClockTime },

  #[error("field `{0}` must not be empty")]
  EmptyField(&'static str),

  #[error("a lesson needs at least one day")]
  NoDays,

  #[error("{0} is listed more than once")]
  DuplicateDay(Weekday),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
