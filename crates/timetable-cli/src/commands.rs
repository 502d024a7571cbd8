//! Non-interactive subcommands.
//!
//! Each command works on an already-opened [`Planner`] and writes its
//! human-readable output to `out`.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use clap::Args;
use timetable_core::{
  grid::GridSpec,
  lesson::{ClockTime, LessonDraft, LessonId, Weekday, DEFAULT_COLOR},
  planner::Planner,
  store::ScheduleStore,
};

use crate::render;

// ─── Argument types ──────────────────────────────────────────────────────────

/// Every field of a new lesson.
#[derive(Args, Debug)]
pub struct LessonArgs {
  /// Lesson name, e.g. "Linear Algebra".
  #[arg(long)]
  pub name: String,

  #[arg(long)]
  pub instructor: String,

  /// Day(s) of the week; repeat or comma-separate.
  #[arg(long = "day", required = true, value_delimiter = ',', value_parser = parse_weekday)]
  pub days: Vec<Weekday>,

  /// Start time, HH:MM (24-hour, zero-padded).
  #[arg(long, value_parser = parse_time)]
  pub start: ClockTime,

  /// End time, HH:MM (24-hour, zero-padded).
  #[arg(long, value_parser = parse_time)]
  pub end: ClockTime,

  #[arg(long)]
  pub room: String,

  /// Display color, e.g. "#3366ff".
  #[arg(long, default_value = DEFAULT_COLOR)]
  pub color: String,
}

impl From<LessonArgs> for LessonDraft {
  fn from(a: LessonArgs) -> Self {
    LessonDraft::new(a.name, a.instructor, a.days, a.start, a.end, a.room).with_color(a.color)
  }
}

/// Fields to change on an existing lesson; anything omitted keeps its value.
#[derive(Args, Debug, Default)]
pub struct EditArgs {
  #[arg(long)]
  pub name: Option<String>,

  #[arg(long)]
  pub instructor: Option<String>,

  /// Replace the lesson's days; repeat or comma-separate.
  #[arg(long = "day", value_delimiter = ',', value_parser = parse_weekday)]
  pub days: Vec<Weekday>,

  #[arg(long, value_parser = parse_time)]
  pub start: Option<ClockTime>,

  #[arg(long, value_parser = parse_time)]
  pub end: Option<ClockTime>,

  #[arg(long)]
  pub room: Option<String>,

  #[arg(long)]
  pub color: Option<String>,
}

impl EditArgs {
  /// Overlay the given fields on a pre-filled draft.
  pub fn apply(self, mut draft: LessonDraft) -> LessonDraft {
    if let Some(name) = self.name {
      draft.name = name;
    }
    if let Some(instructor) = self.instructor {
      draft.instructor = instructor;
    }
    if !self.days.is_empty() {
      draft.days = self.days;
    }
    if let Some(start) = self.start {
      draft.start_time = start;
    }
    if let Some(end) = self.end {
      draft.end_time = end;
    }
    if let Some(room) = self.room {
      draft.room = room;
    }
    if let Some(color) = self.color {
      draft.color = color;
    }
    draft
  }
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
  s.trim()
    .parse()
    .map_err(|_| format!("unknown day {s:?}; expected Monday through Sunday"))
}

fn parse_time(s: &str) -> Result<ClockTime, timetable_core::TimeError> { s.parse() }

// ─── Commands ────────────────────────────────────────────────────────────────

pub fn list<S: ScheduleStore>(planner: &Planner<S>, out: &mut impl Write) -> Result<()> {
  out.write_all(render::lesson_table(planner.lessons()).as_bytes())?;
  Ok(())
}

pub fn grid<S: ScheduleStore>(planner: &Planner<S>, out: &mut impl Write) -> Result<()> {
  out.write_all(render::week_grid(planner.lessons(), &GridSpec::WEEK).as_bytes())?;
  Ok(())
}

pub async fn add<S: ScheduleStore>(
  planner: &mut Planner<S>,
  args: LessonArgs,
  out: &mut impl Write,
) -> Result<()> {
  let lesson = planner.add(args.into()).await?;
  writeln!(out, "Added {} ({})", lesson.name, lesson.id)?;
  Ok(())
}

pub async fn edit<S: ScheduleStore>(
  planner: &mut Planner<S>,
  id: &LessonId,
  changes: EditArgs,
  out: &mut impl Write,
) -> Result<()> {
  let current = planner
    .schedule()
    .get(id)
    .with_context(|| format!("no lesson with id {id}"))?;
  let draft = changes.apply(current.to_draft());
  let lesson = planner.update(id, draft).await?;
  writeln!(out, "Updated {} ({})", lesson.name, lesson.id)?;
  Ok(())
}

pub async fn remove<S: ScheduleStore>(
  planner: &mut Planner<S>,
  id: &LessonId,
  out: &mut impl Write,
) -> Result<()> {
  let lesson = planner.remove(id).await?;
  writeln!(out, "Removed {} ({})", lesson.name, lesson.id)?;
  Ok(())
}

pub fn export<S: ScheduleStore>(
  planner: &Planner<S>,
  path: &Path,
  out: &mut impl Write,
) -> Result<()> {
  let text = timetable_transfer::export(planner.lessons())?;
  std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
  writeln!(out, "Exported {} lessons to {}", planner.lessons().len(), path.display())?;
  Ok(())
}

/// Replace the whole schedule with the contents of `path`. On any error the
/// current schedule is left as it was.
pub async fn import<S: ScheduleStore>(
  planner: &mut Planner<S>,
  path: &Path,
  out: &mut impl Write,
) -> Result<()> {
  let text =
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
  let lessons = timetable_transfer::import(&text)
    .with_context(|| format!("importing {}", path.display()))?;
  let count = lessons.len();
  planner.replace_all(lessons).await?;
  writeln!(out, "Imported {count} lessons from {}", path.display())?;
  Ok(())
}
