//! Error types for the timetable-transfer codec.

use thiserror::Error;

/// Why an import file was rejected. Element indices are zero-based.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid file format: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid file format: expected a JSON array of lessons")]
  NotAnArray,

  #[error("invalid file format: element {index} is not an object")]
  NotAnObject { index: usize },

  #[error("invalid file format: element {index} is missing `{field}`")]
  MissingField { index: usize, field: &'static str },

  #[error("invalid file format: `days` of element {index} is not an array")]
  DaysNotArray { index: usize },

  #[error("invalid lesson at element {index}: {source}")]
  InvalidLesson {
    index:  usize,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("invalid schedule: {0}")]
  Schedule(#[from] timetable_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
