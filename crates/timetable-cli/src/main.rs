//! `timetable` — weekly class schedule planner.
//!
//! # Usage
//!
//! ```
//! timetable add --name Calculus --instructor "Dr. Noether" --day Monday,Wednesday \
//!   --start 09:00 --end 10:30 --room "Hall B" --color "#3366ff"
//! timetable grid
//! timetable view
//! timetable export --output schedule.json
//! timetable import schedule.json
//! ```

mod app;
mod commands;
mod render;
mod settings;
mod ui;

use std::{
  io::{self, Write},
  path::PathBuf,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use commands::{EditArgs, LessonArgs};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use timetable_core::{lesson::LessonId, planner::Planner};
use timetable_store_sqlite::SqliteStore;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "timetable", version, about = "Plan a weekly class schedule")]
struct Cli {
  /// Path to a TOML config file (store_path, storage_key, dark_mode).
  #[arg(short, long, value_name = "FILE", default_value = "timetable.toml")]
  config: PathBuf,

  /// SQLite file holding the schedule; overrides `store_path`.
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  /// Key the lessons are stored under; overrides `storage_key`.
  #[arg(long)]
  key: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print every lesson, one per line.
  List,
  /// Add a lesson, rejecting it if it overlaps an existing one.
  Add(LessonArgs),
  /// Change fields of an existing lesson.
  Edit {
    id:      LessonId,
    #[command(flatten)]
    changes: EditArgs,
  },
  /// Delete a lesson.
  Remove { id: LessonId },
  /// Print the week as an hour-by-day table.
  Grid,
  /// Open the interactive week view.
  View,
  /// Write the schedule as a JSON array.
  Export {
    #[arg(short, long, default_value = timetable_transfer::EXPORT_FILE_NAME)]
    output: PathBuf,
  },
  /// Replace the whole schedule with the lessons in a JSON file.
  Import { file: PathBuf },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Flags override env, which overrides the config file.
  let mut settings = Settings::load(&cli.config)?;
  if let Some(store) = cli.store {
    settings.store_path = store;
  }
  if let Some(key) = cli.key {
    settings.storage_key = key;
  }

  let path = settings.resolved_store_path();
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating data directory {}", parent.display()))?;
  }
  debug!(path = %path.display(), key = %settings.storage_key, "opening store");

  let store = SqliteStore::open(&path)
    .await
    .with_context(|| format!("opening store at {}", path.display()))?
    .with_key(settings.storage_key.clone());
  let mut planner = Planner::open(store)
    .await
    .context("loading schedule")?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  match cli.command {
    Command::List => commands::list(&planner, &mut out)?,
    Command::Add(args) => commands::add(&mut planner, args, &mut out).await?,
    Command::Edit { id, changes } => commands::edit(&mut planner, &id, changes, &mut out).await?,
    Command::Remove { id } => commands::remove(&mut planner, &id, &mut out).await?,
    Command::Grid => commands::grid(&planner, &mut out)?,
    Command::Export { output } => commands::export(&planner, &output, &mut out)?,
    Command::Import { file } => commands::import(&mut planner, &file, &mut out).await?,
    Command::View => {
      drop(out);
      return run_view(App::new(planner, settings.dark_mode)).await;
    }
  }
  out.flush()?;
  Ok(())
}

// ─── Week view ────────────────────────────────────────────────────────────────

async fn run_view(mut app: App<SqliteStore>) -> Result<()> {
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<SqliteStore>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key).await? {
          break;
        }
      }
      // Resize and everything else: redraw on the next iteration.
      _ => {}
    }
  }

  Ok(())
}
