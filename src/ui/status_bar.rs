//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the status bar: the last message on the left, the active filter on the right.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let filter = format!(" {} ", app.controller.state());
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(filter.width() as u16)])
        .split(area);

    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    f.render_widget(Paragraph::new(app.status.as_str()).style(style), halves[0]);
    f.render_widget(
        Paragraph::new(filter).style(style.fg(colors.label)),
        halves[1],
    );
}
