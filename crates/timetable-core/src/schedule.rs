//! [`Schedule`] — the owned, in-process lesson collection.
//!
//! Every mutation either succeeds completely or leaves the collection
//! untouched: validation and conflict checks run before anything is written.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  conflict,
  lesson::{Lesson, LessonDraft, LessonId},
};

/// An ordered list of lessons (insertion order, edits keep their position).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
  lessons: Vec<Lesson>,
}

impl Schedule {
  pub fn new() -> Self { Self::default() }

  /// Build a schedule from an existing collection, validating every lesson
  /// and id uniqueness. Overlaps are not checked.
  pub fn from_lessons(lessons: Vec<Lesson>) -> Result<Self> {
    check_collection(&lessons)?;
    Ok(Self { lessons })
  }

  pub fn list(&self) -> &[Lesson] { &self.lessons }

  pub fn get(&self, id: &LessonId) -> Option<&Lesson> {
    self.lessons.iter().find(|l| &l.id == id)
  }

  pub fn len(&self) -> usize { self.lessons.len() }

  pub fn is_empty(&self) -> bool { self.lessons.is_empty() }

  pub fn into_lessons(self) -> Vec<Lesson> { self.lessons }

  /// Append a new lesson with a freshly generated id.
  ///
  /// Fails with [`Error::Conflict`] if it overlaps any existing lesson.
  pub fn add(&mut self, draft: LessonDraft) -> Result<&Lesson> {
    let lesson = draft.into_lesson(LessonId::generate())?;
    self.check_conflicts(&lesson, None)?;
    self.lessons.push(lesson);
    Ok(&self.lessons[self.lessons.len() - 1])
  }

  /// Replace the lesson with `id` wholesale, keeping its id and position.
  ///
  /// The lesson's previous version is left out of the conflict check, so
  /// editing a lesson in place never conflicts with itself.
  pub fn update(&mut self, id: &LessonId, draft: LessonDraft) -> Result<&Lesson> {
    let pos = self.position(id)?;
    let lesson = draft.into_lesson(id.clone())?;
    self.check_conflicts(&lesson, Some(id))?;
    self.lessons[pos] = lesson;
    Ok(&self.lessons[pos])
  }

  /// Remove and return the lesson with `id`.
  pub fn remove(&mut self, id: &LessonId) -> Result<Lesson> {
    let pos = self.position(id)?;
    Ok(self.lessons.remove(pos))
  }

  /// Swap in an entirely new collection. Nothing changes if any lesson is
  /// invalid or ids repeat.
  pub fn replace_all(&mut self, lessons: Vec<Lesson>) -> Result<()> {
    check_collection(&lessons)?;
    self.lessons = lessons;
    Ok(())
  }

  fn position(&self, id: &LessonId) -> Result<usize> {
    self
      .lessons
      .iter()
      .position(|l| &l.id == id)
      .ok_or_else(|| Error::LessonNotFound(id.clone()))
  }

  fn check_conflicts(&self, candidate: &Lesson, exclude: Option<&LessonId>) -> Result<()> {
    let others = self.lessons.iter().filter(|l| Some(&l.id) != exclude);
    let clashing: Vec<&Lesson> = conflict::conflicts(candidate, others).collect();
    if clashing.is_empty() {
      return Ok(());
    }
    Err(Error::Conflict {
      ids:   clashing.iter().map(|l| l.id.clone()).collect(),
      names: clashing.iter().map(|l| l.name.clone()).collect(),
    })
  }
}

fn check_collection(lessons: &[Lesson]) -> Result<()> {
  let mut seen = HashSet::with_capacity(lessons.len());
  for lesson in lessons {
    lesson.validate()?;
    if !seen.insert(&lesson.id) {
      return Err(Error::DuplicateId(lesson.id.clone()));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lesson::Weekday;

  fn draft(name: &str, days: &[Weekday], start: &str, end: &str) -> LessonDraft {
    LessonDraft::new(
      name,
      "Prof. Lovelace",
      days.to_vec(),
      start.parse().unwrap(),
      end.parse().unwrap(),
      "Hall A",
    )
  }

  #[test]
  fn add_assigns_unique_ids_and_keeps_order() {
    let mut s = Schedule::new();
    let a = s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap().id.clone();
    let b = s.add(draft("B", &[Weekday::Monday], "10:00", "11:00")).unwrap().id.clone();

    assert_ne!(a, b);
    let names: Vec<_> = s.list().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
  }

  #[test]
  fn add_rejects_conflict_and_leaves_collection_unchanged() {
    let mut s = Schedule::new();
    s.add(draft("A", &[Weekday::Monday], "09:00", "10:30")).unwrap();
    let before = s.clone();

    let err = s.add(draft("B", &[Weekday::Monday], "10:00", "11:00")).unwrap_err();
    match &err {
      Error::Conflict { names, .. } => assert_eq!(names, &["A".to_string()]),
      other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Schedule conflict detected!"));
    assert_eq!(s, before);
  }

  #[test]
  fn add_rejects_invalid_draft() {
    let mut s = Schedule::new();
    let err = s.add(draft("A", &[Weekday::Monday], "10:00", "09:00")).unwrap_err();
    assert!(matches!(err, Error::InvalidTimeRange { .. }));
    assert!(s.is_empty());
  }

  #[test]
  fn editing_room_only_never_self_conflicts() {
    let mut s = Schedule::new();
    let id = s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap().id.clone();

    let mut edit = s.get(&id).unwrap().to_draft();
    edit.room = "Hall B".into();
    let updated = s.update(&id, edit).unwrap();
    assert_eq!(updated.room, "Hall B");
    assert_eq!(updated.id, id);
    assert_eq!(s.len(), 1);
  }

  #[test]
  fn update_still_checks_other_lessons() {
    let mut s = Schedule::new();
    s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap();
    let id = s.add(draft("B", &[Weekday::Tuesday], "09:00", "10:00")).unwrap().id.clone();
    let before = s.clone();

    let moved = draft("B", &[Weekday::Tuesday, Weekday::Monday], "09:30", "10:30");
    assert!(matches!(s.update(&id, moved), Err(Error::Conflict { .. })));
    assert_eq!(s, before);
  }

  #[test]
  fn update_keeps_position() {
    let mut s = Schedule::new();
    s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap();
    let id = s.add(draft("B", &[Weekday::Monday], "11:00", "12:00")).unwrap().id.clone();
    s.add(draft("C", &[Weekday::Monday], "13:00", "14:00")).unwrap();

    s.update(&id, draft("B2", &[Weekday::Friday], "11:00", "12:00")).unwrap();
    let names: Vec<_> = s.list().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["A", "B2", "C"]);
  }

  #[test]
  fn update_and_remove_unknown_id_fail() {
    let mut s = Schedule::new();
    let ghost = LessonId::from("ghost");
    assert!(matches!(
      s.update(&ghost, draft("A", &[Weekday::Monday], "09:00", "10:00")),
      Err(Error::LessonNotFound(_))
    ));
    assert!(matches!(s.remove(&ghost), Err(Error::LessonNotFound(_))));
  }

  #[test]
  fn remove_returns_lesson() {
    let mut s = Schedule::new();
    let id = s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap().id.clone();
    let removed = s.remove(&id).unwrap();
    assert_eq!(removed.name, "A");
    assert!(s.get(&id).is_none());
  }

  #[test]
  fn replace_all_is_all_or_nothing() {
    let mut s = Schedule::new();
    s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap();
    let before = s.clone();

    let good = draft("X", &[Weekday::Friday], "08:00", "09:00")
      .into_lesson(LessonId::from("x"))
      .unwrap();
    let mut dup = good.clone();
    dup.name = "Y".into();
    assert!(matches!(
      s.replace_all(vec![good.clone(), dup]),
      Err(Error::DuplicateId(_))
    ));
    assert_eq!(s, before);

    s.replace_all(vec![good.clone()]).unwrap();
    assert_eq!(s.list().to_vec(), vec![good]);
  }

  #[test]
  fn serialises_as_plain_array() {
    let mut s = Schedule::new();
    s.add(draft("A", &[Weekday::Monday], "09:00", "10:00")).unwrap();
    let value = serde_json::to_value(&s).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["name"], "A");
  }
}
