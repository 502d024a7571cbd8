//! Placement of lessons on the weekly grid.
//!
//! The grid has one column per weekday (Monday first) and one row per hour,
//! starting at [`GRID_START_HOUR`]. Placements are expressed in fractional
//! row units so a lesson from 09:30 to 10:15 spans rows 2.5 to 3.25. Whether
//! that span is drawn as a continuous block or bucketed into whole-hour cells
//! is up to the presentation layer.

use std::ops::Range;

use crate::lesson::{ClockTime, Lesson, Weekday};

/// First hour shown on the grid (07:00).
pub const GRID_START_HOUR: u8 = 7;

/// Number of one-hour rows (07:00 through the 21:00 row, ending at 22:00).
pub const GRID_ROWS: u8 = 15;

// ─── GridSpec ────────────────────────────────────────────────────────────────

/// The visible window of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
  pub start_hour: u8,
  pub rows:       u8,
}

impl GridSpec {
  pub const WEEK: Self = Self { start_hour: GRID_START_HOUR, rows: GRID_ROWS };

  /// Fractional row of `time`. Negative above the grid, `>= rows` below it.
  pub fn row_of(&self, time: ClockTime) -> f64 {
    (f64::from(time.minutes()) - f64::from(self.start_hour) * 60.0) / 60.0
  }

  /// The hour each row starts at, top to bottom.
  pub fn hours(&self) -> impl Iterator<Item = u8> + use<> {
    let start = self.start_hour;
    (0..self.rows).map(move |r| start + r)
  }
}

impl Default for GridSpec {
  fn default() -> Self { Self::WEEK }
}

// ─── Placement ───────────────────────────────────────────────────────────────

/// Where one day's occurrence of a lesson sits on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
  pub day:       Weekday,
  /// Zero-based column, Monday = 0.
  pub column:    usize,
  pub row_start: f64,
  pub row_end:   f64,
}

impl Placement {
  pub fn height(&self) -> f64 { self.row_end - self.row_start }

  /// Whole rows the span touches, including partially covered ones.
  /// May extend outside the grid.
  pub fn rows(&self) -> Range<i32> {
    self.row_start.floor() as i32..self.row_end.ceil() as i32
  }

  /// Clock hours of the visible cells the span touches, for bucketed layouts.
  pub fn hours(&self, grid: &GridSpec) -> impl Iterator<Item = u8> + use<> {
    let start = grid.start_hour;
    let visible = 0..i32::from(grid.rows);
    self
      .rows()
      .filter(move |r| visible.contains(r))
      .map(move |r| start + r as u8)
  }

  /// The part of the span that lies inside `grid`, or `None` if it is
  /// entirely outside.
  pub fn clip(&self, grid: &GridSpec) -> Option<Placement> {
    let top = self.row_start.max(0.0);
    let bottom = self.row_end.min(f64::from(grid.rows));
    (top < bottom).then_some(Placement { row_start: top, row_end: bottom, ..*self })
  }
}

// ─── Placer ──────────────────────────────────────────────────────────────────

/// Place `lesson` on the standard week grid: one placement per day, in the
/// lesson's day order, all with the same row span.
pub fn placement(lesson: &Lesson) -> Vec<Placement> { place(lesson, &GridSpec::WEEK) }

/// As [`placement`] but against an arbitrary grid window. Out-of-range times
/// are not clipped.
pub fn place(lesson: &Lesson, grid: &GridSpec) -> Vec<Placement> {
  let row_start = grid.row_of(lesson.start_time);
  let row_end = grid.row_of(lesson.end_time);
  lesson
    .days
    .iter()
    .map(|&day| Placement { day, column: day.index(), row_start, row_end })
    .collect()
}

/// Lessons occupying the one-hour cell starting at `hour` on `day`, in
/// collection order. A lesson occupies a cell iff its span intersects it.
pub fn lessons_at(
  lessons: &[Lesson],
  day: Weekday,
  hour: u8,
) -> impl Iterator<Item = &Lesson> {
  lessons
    .iter()
    .filter(move |l| l.occurs_on(day) && l.span().covers_hour(hour))
}
