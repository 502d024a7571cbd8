//! Lesson — the single entity of a weekly schedule.
//!
//! A lesson repeats every week on one or more days, between a start and an end
//! clock time. Times are held as minutes since midnight so that every
//! comparison is numeric; the `"HH:MM"` text form only exists at the wire and
//! input boundaries.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::{Error, Result, TimeError};

/// Color given to a lesson when the author does not pick one.
pub const DEFAULT_COLOR: &str = "#ff0000";

// ─── Weekday ─────────────────────────────────────────────────────────────────

/// A day of the week. Declaration order is the column order of the grid.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
  Monday,
  Tuesday,
  Wednesday,
  Thursday,
  Friday,
  Saturday,
  Sunday,
}

impl Weekday {
  /// Every weekday, Monday first.
  pub const ALL: [Weekday; 7] = [
    Self::Monday,
    Self::Tuesday,
    Self::Wednesday,
    Self::Thursday,
    Self::Friday,
    Self::Saturday,
    Self::Sunday,
  ];

  /// Zero-based column index, Monday = 0.
  pub fn index(self) -> usize { self as usize }

  /// Three-letter label for narrow column headers.
  pub fn short(self) -> &'static str {
    let full: &'static str = self.into();
    &full[..3]
  }
}

// ─── ClockTime ───────────────────────────────────────────────────────────────

/// A wall-clock time of day with minute precision.
///
/// Parsed only from strict, zero-padded 24-hour `"HH:MM"`; `"9:30"` and
/// `"24:00"` are rejected.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
  pub fn from_hm(hour: u8, minute: u8) -> Result<Self, TimeError> {
    if hour > 23 {
      return Err(TimeError::Hour(format!("{hour:02}:{minute:02}")));
    }
    if minute > 59 {
      return Err(TimeError::Minute(format!("{hour:02}:{minute:02}")));
    }
    Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
  }

  /// Minutes elapsed since midnight.
  pub fn minutes(self) -> u16 { self.0 }

  pub fn hour(self) -> u8 { (self.0 / 60) as u8 }

  pub fn minute(self) -> u8 { (self.0 % 60) as u8 }
}

impl FromStr for ClockTime {
  type Err = TimeError;

  fn from_str(s: &str) -> Result<Self, TimeError> {
    let b = s.as_bytes();
    let well_formed = b.len() == 5
      && b[2] == b':'
      && [0, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit());
    if !well_formed {
      return Err(TimeError::Format(s.to_owned()));
    }

    let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
    let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
    if hour > 23 {
      return Err(TimeError::Hour(s.to_owned()));
    }
    if minute > 59 {
      return Err(TimeError::Minute(s.to_owned()));
    }
    Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
  }
}

impl fmt::Display for ClockTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}:{:02}", self.hour(), self.minute())
  }
}

impl TryFrom<String> for ClockTime {
  type Error = TimeError;

  fn try_from(s: String) -> Result<Self, TimeError> { s.parse() }
}

impl From<ClockTime> for String {
  fn from(t: ClockTime) -> Self { t.to_string() }
}

// ─── TimeSpan ────────────────────────────────────────────────────────────────

/// The half-open interval `[start, end)` a lesson occupies on each of its days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
  pub start: ClockTime,
  pub end:   ClockTime,
}

impl TimeSpan {
  /// Two spans are disjoint iff one ends no later than the other starts.
  /// Touching spans (`09:00–10:00` and `10:00–11:00`) are disjoint.
  pub fn is_disjoint(&self, other: &Self) -> bool {
    self.end <= other.start || self.start >= other.end
  }

  pub fn overlaps(&self, other: &Self) -> bool { !self.is_disjoint(other) }

  /// Whether the span intersects the one-hour cell `[hour:00, hour+1:00)`.
  pub fn covers_hour(&self, hour: u8) -> bool {
    let cell_start = u16::from(hour) * 60;
    let cell_end = cell_start + 60;
    self.start.minutes() < cell_end && self.end.minutes() > cell_start
  }

  pub fn duration_minutes(&self) -> i32 {
    i32::from(self.end.minutes()) - i32::from(self.start.minutes())
  }
}

// ─── LessonId ────────────────────────────────────────────────────────────────

/// Opaque identifier of a lesson; assigned once, never changed.
///
/// Generated ids are UUID v4 strings, but imported collections may carry any
/// non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(String);

impl LessonId {
  pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for LessonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for LessonId {
  fn from(s: String) -> Self { Self(s) }
}

impl From<&str> for LessonId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

// ─── Lesson ──────────────────────────────────────────────────────────────────

/// A weekly recurring lesson. Field names on the wire are camelCase:
/// `id, name, instructor, days, startTime, endTime, room, color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
  pub id:         LessonId,
  pub name:       String,
  pub instructor: String,
  /// Iteration order only; carries no meaning for conflicts or placement.
  pub days:       Vec<Weekday>,
  pub start_time: ClockTime,
  pub end_time:   ClockTime,
  pub room:       String,
  pub color:      String,
}

impl Lesson {
  pub fn span(&self) -> TimeSpan {
    TimeSpan { start: self.start_time, end: self.end_time }
  }

  pub fn occurs_on(&self, day: Weekday) -> bool { self.days.contains(&day) }

  pub fn shares_day(&self, other: &Lesson) -> bool {
    self.days.iter().any(|d| other.occurs_on(*d))
  }

  /// Check the invariants every stored lesson must satisfy.
  pub fn validate(&self) -> Result<()> {
    if self.id.as_str().trim().is_empty() {
      return Err(Error::EmptyField("id"));
    }
    self.to_draft().validate()
  }

  /// A form pre-filled with this lesson's current values.
  pub fn to_draft(&self) -> LessonDraft {
    LessonDraft {
      name:       self.name.clone(),
      instructor: self.instructor.clone(),
      days:       self.days.clone(),
      start_time: self.start_time,
      end_time:   self.end_time,
      room:       self.room.clone(),
      color:      self.color.clone(),
    }
  }
}

// ─── LessonDraft ─────────────────────────────────────────────────────────────

/// Input to [`crate::schedule::Schedule::add`] and
/// [`crate::schedule::Schedule::update`]. The id is assigned by the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
  pub name:       String,
  pub instructor: String,
  pub days:       Vec<Weekday>,
  pub start_time: ClockTime,
  pub end_time:   ClockTime,
  pub room:       String,
  pub color:      String,
}

impl LessonDraft {
  /// Convenience constructor using [`DEFAULT_COLOR`].
  pub fn new(
    name: impl Into<String>,
    instructor: impl Into<String>,
    days: Vec<Weekday>,
    start_time: ClockTime,
    end_time: ClockTime,
    room: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      instructor: instructor.into(),
      days,
      start_time,
      end_time,
      room: room.into(),
      color: DEFAULT_COLOR.to_owned(),
    }
  }

  pub fn with_color(mut self, color: impl Into<String>) -> Self {
    self.color = color.into();
    self
  }

  pub fn validate(&self) -> Result<()> {
    for (field, value) in [
      ("name", &self.name),
      ("instructor", &self.instructor),
      ("room", &self.room),
      ("color", &self.color),
    ] {
      if value.trim().is_empty() {
        return Err(Error::EmptyField(field));
      }
    }

    if self.days.is_empty() {
      return Err(Error::NoDays);
    }
    for (i, day) in self.days.iter().enumerate() {
      if self.days[..i].contains(day) {
        return Err(Error::DuplicateDay(*day));
      }
    }

    if self.start_time >= self.end_time {
      return Err(Error::InvalidTimeRange {
        start: self.start_time,
        end:   self.end_time,
      });
    }
    Ok(())
  }

  /// Validate and attach `id`.
  pub fn into_lesson(self, id: LessonId) -> Result<Lesson> {
    self.validate()?;
    Ok(Lesson {
      id,
      name: self.name,
      instructor: self.instructor,
      days: self.days,
      start_time: self.start_time,
      end_time: self.end_time,
      room: self.room,
      color: self.color,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn t(s: &str) -> ClockTime { s.parse().unwrap() }

  #[test]
  fn parses_zero_padded_times() {
    assert_eq!(t("00:00").minutes(), 0);
    assert_eq!(t("09:30").minutes(), 570);
    assert_eq!(t("23:59").minutes(), 1439);
    assert_eq!(t("07:05").to_string(), "07:05");
  }

  #[test]
  fn rejects_malformed_times() {
    assert!(matches!("9:30".parse::<ClockTime>(), Err(TimeError::Format(_))));
    assert!(matches!("09:3".parse::<ClockTime>(), Err(TimeError::Format(_))));
    assert!(matches!("09-30".parse::<ClockTime>(), Err(TimeError::Format(_))));
    assert!(matches!("ab:cd".parse::<ClockTime>(), Err(TimeError::Format(_))));
    assert!(matches!("24:00".parse::<ClockTime>(), Err(TimeError::Hour(_))));
    assert!(matches!("12:60".parse::<ClockTime>(), Err(TimeError::Minute(_))));
  }

  #[test]
  fn numeric_order_matches_clock_order() {
    assert!(t("09:59") < t("10:00"));
    assert!(t("00:01") > t("00:00"));
  }

  #[test]
  fn clock_time_serde_uses_text_form() {
    let json = serde_json::to_string(&t("08:15")).unwrap();
    assert_eq!(json, "\"08:15\"");
    assert!(serde_json::from_str::<ClockTime>("\"8:15\"").is_err());
  }

  #[test]
  fn weekday_parses_case_insensitively() {
    assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
    assert_eq!("SUNDAY".parse::<Weekday>().unwrap(), Weekday::Sunday);
    assert!("Funday".parse::<Weekday>().is_err());
    assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    assert_eq!(Weekday::Thursday.short(), "Thu");
    assert_eq!(Weekday::Sunday.index(), 6);
  }

  #[test]
  fn touching_spans_are_disjoint() {
    let a = TimeSpan { start: t("09:00"), end: t("10:00") };
    let b = TimeSpan { start: t("10:00"), end: t("11:00") };
    assert!(a.is_disjoint(&b));
    assert!(b.is_disjoint(&a));
  }

  #[test]
  fn covers_hour_uses_intersection() {
    let span = TimeSpan { start: t("09:30"), end: t("10:15") };
    assert!(!span.covers_hour(8));
    assert!(span.covers_hour(9));
    assert!(span.covers_hour(10));
    assert!(!span.covers_hour(11));

    let exact = TimeSpan { start: t("09:00"), end: t("10:00") };
    assert!(exact.covers_hour(9));
    assert!(!exact.covers_hour(10));
  }

  fn draft() -> LessonDraft {
    LessonDraft::new(
      "Algebra",
      "Dr. Noether",
      vec![Weekday::Monday],
      t("09:00"),
      t("10:00"),
      "B12",
    )
  }

  #[test]
  fn draft_defaults_color() {
    assert_eq!(draft().color, DEFAULT_COLOR);
    assert_eq!(draft().with_color("#00ff00").color, "#00ff00");
  }

  #[test]
  fn draft_rejects_inverted_range() {
    let mut d = draft();
    d.end_time = t("09:00");
    assert!(matches!(d.validate(), Err(Error::InvalidTimeRange { .. })));
    d.end_time = t("08:00");
    assert!(matches!(d.validate(), Err(Error::InvalidTimeRange { .. })));
  }

  #[test]
  fn draft_rejects_empty_and_duplicate_days() {
    let mut d = draft();
    d.days.clear();
    assert!(matches!(d.validate(), Err(Error::NoDays)));
    d.days = vec![Weekday::Monday, Weekday::Friday, Weekday::Monday];
    assert!(matches!(d.validate(), Err(Error::DuplicateDay(Weekday::Monday))));
  }

  #[test]
  fn draft_rejects_blank_labels() {
    let mut d = draft();
    d.instructor = "  ".into();
    assert!(matches!(d.validate(), Err(Error::EmptyField("instructor"))));
  }

  #[test]
  fn lesson_round_trips_through_draft() {
    let lesson = draft().into_lesson(LessonId::from("a")).unwrap();
    let again = lesson.to_draft().into_lesson(lesson.id.clone()).unwrap();
    assert_eq!(lesson, again);
  }

  #[test]
  fn lesson_serialises_with_camel_case_fields() {
    let lesson = draft().into_lesson(LessonId::from("x1")).unwrap();
    let value = serde_json::to_value(&lesson).unwrap();
    assert_eq!(value["startTime"], "09:00");
    assert_eq!(value["endTime"], "10:00");
    assert_eq!(value["days"], serde_json::json!(["Monday"]));
    assert_eq!(value["id"], "x1");
  }
}
