//! Application state machine and event dispatcher for the week view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use timetable_core::{lesson::Lesson, planner::Planner, store::ScheduleStore};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Browsing the lesson list; the grid highlights the selection.
  Browse,
  /// Waiting for `y`/`n` before deleting the selected lesson.
  ConfirmDelete,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  pub screen: Screen,

  /// Owns the schedule; every change is written through to its store.
  pub planner: Planner<S>,

  /// Current fuzzy-filter string (only active when `filter_active`).
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within the *filtered* lesson list.
  pub list_cursor: usize,

  pub dark_mode: bool,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl<S: ScheduleStore> App<S> {
  pub fn new(planner: Planner<S>, dark_mode: bool) -> Self {
    Self {
      screen: Screen::Browse,
      planner,
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      dark_mode,
      status_msg: String::new(),
    }
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// Lessons that match the current filter query, in schedule order.
  pub fn filtered_lessons(&self) -> Vec<&Lesson> {
    let lessons = self.planner.lessons();
    if self.filter.is_empty() {
      return lessons.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    lessons
      .iter()
      .filter(|l| {
        [&l.name, &l.instructor, &l.room]
          .iter()
          .any(|field| matcher.fuzzy_match(field, &self.filter).is_some())
      })
      .collect()
  }

  /// The lesson under the list cursor in the filtered view, if any.
  pub fn cursor_lesson(&self) -> Option<&Lesson> {
    self.filtered_lessons().get(self.list_cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return Ok(true);
    }

    match self.screen {
      Screen::Browse => Ok(self.handle_browse_key(key)),
      Screen::ConfirmDelete => {
        self.handle_confirm_key(key).await;
        Ok(true)
      }
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_lessons().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }

      KeyCode::Char('t') => {
        self.dark_mode = !self.dark_mode;
      }

      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(name) = self.cursor_lesson().map(|l| l.name.clone()) {
          self.status_msg = format!("Delete {name}? [y/n]");
          self.screen = Screen::ConfirmDelete;
        }
      }

      _ => {}
    }
    true
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') => {
        if let Some(id) = self.cursor_lesson().map(|l| l.id.clone()) {
          self.status_msg = match self.planner.remove(&id).await {
            Ok(removed) => format!("Deleted {}", removed.name),
            Err(e) => format!("Error: {e}"),
          };
        }
        let len = self.filtered_lessons().len();
        self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
        self.screen = Screen::Browse;
      }
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
        self.status_msg.clear();
        self.screen = Screen::Browse;
      }
      _ => {}
    }
  }
}
