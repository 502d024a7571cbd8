//! TUI rendering — header, lesson list, week grid and status bar.

pub mod lesson_list;
pub mod week_grid;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};
use timetable_core::store::ScheduleStore;

use crate::app::{App, Screen};

// ─── Theme ────────────────────────────────────────────────────────────────────

/// Colors shared by every pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
  pub fg:        Color,
  pub bg:        Color,
  pub dim:       Color,
  pub border:    Color,
  pub accent:    Color,
  pub header_bg: Color,
  pub cursor_bg: Color,
}

impl Theme {
  pub const LIGHT: Self = Self {
    fg:        Color::Black,
    bg:        Color::White,
    dim:       Color::Gray,
    border:    Color::DarkGray,
    accent:    Color::Blue,
    header_bg: Color::Gray,
    cursor_bg: Color::LightBlue,
  };

  pub const DARK: Self = Self {
    fg:        Color::White,
    bg:        Color::Black,
    dim:       Color::DarkGray,
    border:    Color::DarkGray,
    accent:    Color::Cyan,
    header_bg: Color::DarkGray,
    cursor_bg: Color::Blue,
  };

  pub fn for_mode(dark: bool) -> Self { if dark { Self::DARK } else { Self::LIGHT } }
}

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: ScheduleStore>(f: &mut Frame, app: &App<S>) {
  let theme = Theme::for_mode(app.dark_mode);
  let area = f.area();

  f.render_widget(Block::default().style(Style::default().fg(theme.fg).bg(theme.bg)), area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app, &theme);
  draw_body(f, rows[1], app, &theme);
  draw_status(f, rows[2], app, &theme);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header<S: ScheduleStore>(f: &mut Frame, area: Rect, app: &App<S>, theme: &Theme) {
  let today = Local::now().format("%A %Y-%m-%d").to_string();

  let left = Span::styled(
    format!(" timetable  {} lessons", app.planner.lessons().len()),
    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{today} "), Style::default().fg(theme.fg));

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(theme.header_bg)),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body<S: ScheduleStore>(f: &mut Frame, area: Rect, app: &App<S>, theme: &Theme) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
    .split(area);

  lesson_list::draw(f, cols[0], app, theme);
  week_grid::draw(f, cols[1], app, theme);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: ScheduleStore>(f: &mut Frame, area: Rect, app: &App<S>, theme: &Theme) {
  let (mode_label, hints) = match app.screen {
    Screen::Browse if app.filter_active => ("FILTER", "Type to filter  Esc clear  Enter keep"),
    Screen::Browse => ("WEEK", "↑↓/jk select  / filter  d delete  t theme  q quit"),
    Screen::ConfirmDelete => ("DELETE", "y confirm  n cancel"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(theme.bg)
      .bg(theme.accent)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(theme.dim));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span])).style(Style::default().bg(theme.bg)),
    area,
  );
}
