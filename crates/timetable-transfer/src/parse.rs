//! Import-file validation.
//!
//! The file is checked structurally first (array of objects, every required
//! field present and truthy, `days` an array) so that a malformed file is
//! reported by element and field name, then each element is decoded into a
//! typed [`Lesson`] and validated.

use serde_json::Value;
use timetable_core::{lesson::Lesson, schedule::Schedule};

use crate::error::{Error, Result};

/// Fields every element of an import file must carry.
pub(crate) const REQUIRED_FIELDS: [&str; 8] = [
  "id",
  "name",
  "instructor",
  "days",
  "startTime",
  "endTime",
  "room",
  "color",
];

pub(crate) fn parse_lessons(input: &str) -> Result<Vec<Lesson>> {
  let value: Value = serde_json::from_str(input)?;
  let Value::Array(items) = value else {
    return Err(Error::NotAnArray);
  };

  let lessons = items
    .into_iter()
    .enumerate()
    .map(|(index, item)| parse_lesson(index, item))
    .collect::<Result<Vec<_>>>()?;

  // Collection-level checks (unique ids).
  Ok(Schedule::from_lessons(lessons)?.into_lessons())
}

fn parse_lesson(index: usize, item: Value) -> Result<Lesson> {
  let Value::Object(fields) = &item else {
    return Err(Error::NotAnObject { index });
  };

  for field in REQUIRED_FIELDS {
    if !fields.get(field).is_some_and(is_truthy) {
      return Err(Error::MissingField { index, field });
    }
  }
  if !fields["days"].is_array() {
    return Err(Error::DaysNotArray { index });
  }

  let invalid = |e: Box<dyn std::error::Error + Send + Sync>| Error::InvalidLesson {
    index,
    source: e,
  };
  let lesson: Lesson = serde_json::from_value(item).map_err(|e| invalid(Box::new(e)))?;
  lesson.validate().map_err(|e| invalid(Box::new(e)))?;
  Ok(lesson)
}

/// JavaScript truthiness, which is what the import format was defined by.
fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn truthiness_follows_javascript() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!(1)));
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!({})));
  }

  #[test]
  fn reports_first_missing_field_by_index() {
    let input = json!([
      {
        "id": "a", "name": "A", "instructor": "I", "days": ["Monday"],
        "startTime": "09:00", "endTime": "10:00", "room": "R", "color": "#fff"
      },
      {
        "id": "b", "name": "B", "instructor": "I", "days": ["Monday"],
        "startTime": "11:00", "endTime": "12:00", "room": "", "color": "#fff"
      }
    ])
    .to_string();

    let err = parse_lessons(&input).unwrap_err();
    assert!(matches!(err, Error::MissingField { index: 1, field: "room" }));
  }

  #[test]
  fn days_must_be_an_array() {
    let input = json!([{
      "id": "a", "name": "A", "instructor": "I", "days": "Monday",
      "startTime": "09:00", "endTime": "10:00", "room": "R", "color": "#fff"
    }])
    .to_string();
    assert!(matches!(
      parse_lessons(&input),
      Err(Error::DaysNotArray { index: 0 })
    ));
  }

  #[test]
  fn non_object_elements_are_rejected() {
    assert!(matches!(
      parse_lessons("[1]"),
      Err(Error::NotAnObject { index: 0 })
    ));
  }

  #[test]
  fn malformed_times_are_rejected() {
    let input = json!([{
      "id": "a", "name": "A", "instructor": "I", "days": ["Monday"],
      "startTime": "9:00", "endTime": "10:00", "room": "R", "color": "#fff"
    }])
    .to_string();
    assert!(matches!(
      parse_lessons(&input),
      Err(Error::InvalidLesson { index: 0, .. })
    ));
  }

  #[test]
  fn inverted_ranges_are_rejected() {
    let input = json!([{
      "id": "a", "name": "A", "instructor": "I", "days": ["Monday"],
      "startTime": "10:00", "endTime": "09:00", "room": "R", "color": "#fff"
    }])
    .to_string();
    assert!(matches!(
      parse_lessons(&input),
      Err(Error::InvalidLesson { index: 0, .. })
    ));
  }

  #[test]
  fn unknown_weekday_is_rejected() {
    let input = json!([{
      "id": "a", "name": "A", "instructor": "I", "days": ["Moonday"],
      "startTime": "09:00", "endTime": "10:00", "room": "R", "color": "#fff"
    }])
    .to_string();
    assert!(matches!(
      parse_lessons(&input),
      Err(Error::InvalidLesson { index: 0, .. })
    ));
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let one = json!({
      "id": "a", "name": "A", "instructor": "I", "days": ["Monday"],
      "startTime": "09:00", "endTime": "10:00", "room": "R", "color": "#fff"
    });
    let input = json!([one.clone(), one]).to_string();
    assert!(matches!(parse_lessons(&input), Err(Error::Schedule(_))));
  }

  #[test]
  fn extra_fields_are_ignored() {
    let input = json!([{
      "id": "a", "name": "A", "instructor": "I", "days": ["Monday"],
      "startTime": "09:00", "endTime": "10:00", "room": "R", "color": "#fff",
      "notes": "bring calculator"
    }])
    .to_string();
    let lessons = parse_lessons(&input).unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].id.as_str(), "a");
  }
}
