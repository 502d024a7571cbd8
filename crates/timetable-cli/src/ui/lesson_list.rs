//! Lesson list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetable_core::store::ScheduleStore;

use super::{Theme, week_grid::parse_hex_color};
use crate::app::App;

/// Render the lesson list into `area`.
pub fn draw<S: ScheduleStore>(f: &mut Frame, area: Rect, app: &App<S>, theme: &Theme) {
  let filtered = app.filtered_lessons();
  let total = app.planner.lessons().len();

  let title = if app.filter_active || !app.filter.is_empty() {
    format!(" Lessons ({}/{}) ", filtered.len(), total)
  } else {
    format!(" Lessons ({total}) ")
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(theme.border));

  let items: Vec<ListItem> = filtered
    .iter()
    .map(|lesson| {
      let swatch = parse_hex_color(&lesson.color).unwrap_or(theme.accent);
      let days: Vec<&str> = lesson.days.iter().map(|d| d.short()).collect();
      ListItem::new(vec![
        Line::from(vec![
          Span::styled("█ ", Style::default().fg(swatch)),
          Span::styled(lesson.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
          format!(
            "  {} {}–{}  {}",
            days.join(","),
            lesson.start_time,
            lesson.end_time,
            lesson.room
          ),
          Style::default().fg(theme.dim),
        )),
      ])
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(theme.accent)),
      filter_area,
    );
  }

  if items.is_empty() {
    let hint = if total == 0 {
      "No lessons yet. Add one with `timetable add`."
    } else {
      "Nothing matches the filter."
    };
    f.render_widget(Paragraph::new(hint).style(Style::default().fg(theme.dim)), inner_area);
    return;
  }

  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items).highlight_style(Style::default().bg(theme.cursor_bg)),
    inner_area,
    &mut state,
  );
}
