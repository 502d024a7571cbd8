//! JSON export/import codec for Timetable.
//!
//! Converts between the schedule file format and [`timetable_core`] lessons.
//! Pure synchronous; no file-system or database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! let text = std::fs::read_to_string("schedule.json").unwrap();
//! let lessons = timetable_transfer::import(&text).unwrap();
//! let again = timetable_transfer::export(&lessons).unwrap();
//! ```

pub mod error;
mod parse;

pub use error::{Error, Result};
use timetable_core::lesson::Lesson;

/// File name offered for exports.
pub const EXPORT_FILE_NAME: &str = "schedule.json";

/// Serialize `lessons` as a pretty-printed JSON array.
pub fn export(lessons: &[Lesson]) -> Result<String> {
  Ok(serde_json::to_string_pretty(lessons)?)
}

/// Parse and validate an import file.
///
/// Either every element is a valid lesson and the whole collection is
/// returned, or the first problem found is reported and nothing is returned.
pub fn import(input: &str) -> Result<Vec<Lesson>> {
  let lessons = parse::parse_lessons(input)?;
  tracing::debug!(count = lessons.len(), "parsed import file");
  Ok(lessons)
}

#[cfg(test)]
mod roundtrip_tests {
  use timetable_core::{
    lesson::{LessonDraft, Weekday},
    schedule::Schedule,
  };

  use super::*;

  fn schedule() -> Schedule {
    let mut s = Schedule::new();
    s.add(
      LessonDraft::new(
        "Linear Algebra",
        "Dr. Noether",
        vec![Weekday::Wednesday, Weekday::Monday],
        "09:00".parse().unwrap(),
        "10:30".parse().unwrap(),
        "B12",
      )
      .with_color("#3366ff"),
    )
    .unwrap();
    s.add(LessonDraft::new(
      "Compilers",
      "Prof. Hopper",
      vec![Weekday::Monday],
      "10:30".parse().unwrap(),
      "12:00".parse().unwrap(),
      "Lab 4",
    ))
    .unwrap();
    s
  }

  #[test]
  fn export_then_import_reproduces_collection() {
    let original = schedule();
    let text = export(original.list()).unwrap();
    let imported = import(&text).unwrap();
    assert_eq!(imported, original.list());
  }

  #[test]
  fn export_uses_exact_field_names() {
    let text = export(schedule().list()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = value[0].as_object().unwrap();

    let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = parse::REQUIRED_FIELDS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert_eq!(first["days"], serde_json::json!(["Wednesday", "Monday"]));
  }

  #[test]
  fn export_is_pretty_printed() {
    let text = export(schedule().list()).unwrap();
    assert!(text.starts_with("[\n  {\n    \"id\": "));
  }

  #[test]
  fn empty_collection_round_trips() {
    assert_eq!(export(&[]).unwrap(), "[]");
    assert!(import("[]").unwrap().is_empty());
  }

  #[test]
  fn failed_import_leaves_schedule_unchanged() {
    let mut current = schedule();
    let before = current.clone();

    for bad in [
      "{\"id\": \"a\"}",
      "not json at all",
      "[{\"id\": \"a\", \"name\": \"A\"}]",
    ] {
      let result = import(bad).map(|lessons| current.replace_all(lessons));
      assert!(result.is_err(), "{bad} should be rejected");
      assert_eq!(current, before);
    }
  }

  #[test]
  fn second_element_missing_room_is_rejected() {
    let mut value: serde_json::Value =
      serde_json::from_str(&export(schedule().list()).unwrap()).unwrap();
    value[1].as_object_mut().unwrap().remove("room");

    let err = import(&value.to_string()).unwrap_err();
    assert!(matches!(err, Error::MissingField { index: 1, field: "room" }));
    assert!(err.to_string().contains("room"));
  }

  #[test]
  fn non_array_is_rejected() {
    assert!(matches!(import("{}"), Err(Error::NotAnArray)));
    assert!(matches!(import("\"lessons\""), Err(Error::NotAnArray)));
  }
}
