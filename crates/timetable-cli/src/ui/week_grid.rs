//! Week grid pane — right panel. Seven day columns against an hour axis,
//! each lesson drawn as a block in its own color.

use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::Line,
  widgets::{Block, Borders, Paragraph},
};
use timetable_core::{
  grid::{GridSpec, Placement, place},
  lesson::Weekday,
  store::ScheduleStore,
};

use super::Theme;
use crate::app::App;

/// Width of the hour label column.
const LABEL_WIDTH: u16 = 6;

// ─── Public entry ─────────────────────────────────────────────────────────────

pub fn draw<S: ScheduleStore>(f: &mut Frame, area: Rect, app: &App<S>, theme: &Theme) {
  let grid = GridSpec::WEEK;

  let block = Block::default()
    .title(" Week ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(theme.border));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if inner.height < 2 || inner.width <= LABEL_WIDTH {
    return;
  }

  let mut constraints = vec![Constraint::Length(LABEL_WIDTH)];
  constraints.extend(Weekday::ALL.iter().map(|_| Constraint::Ratio(1, 7)));
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(constraints)
    .split(inner);

  // Day headings.
  for day in Weekday::ALL {
    let col = cols[day.index() + 1];
    f.render_widget(
      Paragraph::new(day.short())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
      Rect { height: 1, ..col },
    );
  }

  let body_height = inner.height - 1;
  let scale = f64::from(body_height) / f64::from(grid.rows);

  // Hour labels.
  for (i, hour) in grid.hours().enumerate() {
    let y = (i as f64 * scale).floor() as u16;
    if y >= body_height {
      break;
    }
    f.render_widget(
      Paragraph::new(format!("{hour:02}:00")).style(Style::default().fg(theme.dim)),
      Rect { x: cols[0].x, y: inner.y + 1 + y, width: LABEL_WIDTH, height: 1 },
    );
  }

  let selected = app.cursor_lesson().map(|l| &l.id);

  for lesson in app.planner.lessons() {
    let bg = parse_hex_color(&lesson.color).unwrap_or(theme.accent);
    let mut style = Style::default().bg(bg).fg(contrast_fg(bg));
    let is_selected = selected == Some(&lesson.id);
    if is_selected {
      style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    for p in place(lesson, &grid).iter().filter_map(|p| p.clip(&grid)) {
      let (top, height) = span_lines(&p, scale);
      let col = cols[p.column + 1];
      let rect = Rect { x: col.x, y: inner.y + 1 + top, width: col.width, height };
      let rect = rect.intersection(inner);
      if rect.is_empty() {
        continue;
      }

      let marker = if is_selected { "▶ " } else { "" };
      let lines = vec![
        Line::from(format!("{marker}{}", lesson.name)),
        Line::from(lesson.room.clone()),
        Line::from(format!("{}–{}", lesson.start_time, lesson.end_time)),
      ];
      f.render_widget(Paragraph::new(lines).style(style), rect);
    }
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Convert a placement's fractional rows into a terminal line offset and
/// height at `scale` lines per hour. Every block is at least one line tall.
pub fn span_lines(p: &Placement, scale: f64) -> (u16, u16) {
  let top = (p.row_start * scale).round().max(0.0) as u16;
  let bottom = (p.row_end * scale).round().max(0.0) as u16;
  (top, bottom.saturating_sub(top).max(1))
}

/// Parse `#rrggbb` or `#rgb` into a true-color value.
pub fn parse_hex_color(s: &str) -> Option<Color> {
  let hex = s.trim().strip_prefix('#')?;
  if !hex.is_ascii() {
    return None;
  }
  let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).ok();
  match hex.len() {
    6 => Some(Color::Rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
    3 => Some(Color::Rgb(channel(0, 1)? * 17, channel(1, 1)? * 17, channel(2, 1)? * 17)),
    _ => None,
  }
}

/// Black or white, whichever reads better on `bg`.
pub fn contrast_fg(bg: Color) -> Color {
  match bg {
    Color::Rgb(r, g, b) => {
      let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
      if luma > 150.0 { Color::Black } else { Color::White }
    }
    _ => Color::Black,
  }
}
