//! Plain-text rendering for the non-interactive commands.

use std::fmt::Write as _;

use timetable_core::{
  grid::{GridSpec, lessons_at},
  lesson::{Lesson, Weekday},
};

/// Width of one day column in the printed grid.
const CELL_WIDTH: usize = 14;

/// One line per lesson, in schedule order.
pub fn lesson_table(lessons: &[Lesson]) -> String {
  if lessons.is_empty() {
    return "No lessons yet. Add one with `timetable add`.\n".to_owned();
  }

  let mut out = String::new();
  for l in lessons {
    let days: Vec<&str> = l.days.iter().map(|d| d.short()).collect();
    let _ = writeln!(
      out,
      "{}  {}–{}  {:<11}  {}  ({}, {})  {}",
      l.id,
      l.start_time,
      l.end_time,
      days.join(","),
      l.name,
      l.instructor,
      l.room,
      l.color,
    );
  }
  out
}

/// The week as a table of hour cells. A lesson appears in every hour cell its
/// span intersects; several lessons in one cell are joined with `/`.
pub fn week_grid(lessons: &[Lesson], grid: &GridSpec) -> String {
  let mut out = String::new();

  let _ = write!(out, "{:<6}", "");
  for day in Weekday::ALL {
    let _ = write!(out, "│{:^width$}", day.short(), width = CELL_WIDTH);
  }
  out.push('\n');

  for hour in grid.hours() {
    let _ = write!(out, "{hour:02}:00 ");
    for day in Weekday::ALL {
      let names: Vec<&str> = lessons_at(lessons, day, hour)
        .map(|l| l.name.as_str())
        .collect();
      let _ = write!(
        out,
        "│{:<width$}",
        truncate(&names.join("/"), CELL_WIDTH),
        width = CELL_WIDTH
      );
    }
    out.push('\n');
  }
  out
}

/// Shorten `s` to at most `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_owned();
  }
  let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
  cut.push('…');
  cut
}
