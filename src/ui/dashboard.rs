//! Dashboard rendering.

use super::formatters::{format_number, pack_words};
use super::keymap_bar::draw_keymap;
use super::status_bar::draw_status;
use super::ThemeColors;
use crate::app::{App, Focus};
use crate::controller::ResetTarget;
use crate::data::MedalColor;
use crate::views::{DisciplineTable, MedalChart, MedalistTable, WordEntry};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

const TITLE: &str = "Danish Olympic Medalists";

/// Draw the whole dashboard.
pub(super) fn draw_dashboard(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let panels = &app.layout.panels;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(panels.middle_percent),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app, chunks[0], &colors);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(panels.detail_percent),
            Constraint::Percentage(panels.chart_percent),
        ])
        .split(chunks[1]);

    // Exactly one of the two left panels is drawn.
    match &app.snapshot().disciplines {
        Some(table) => draw_disciplines(f, app, table, middle[0], &colors),
        None => draw_word_cloud(f, app, &app.snapshot().word_cloud, middle[0], &colors),
    }
    draw_medal_chart(f, app, &app.snapshot().medal_chart, middle[1], &colors);
    draw_medalists(f, app, &app.snapshot().medalists, chunks[2], &colors);

    draw_status(f, chunks[3], app, &colors);
    draw_keymap(f, chunks[4], app.focus, &colors);
}

fn panel_block<'a>(title: String, focused: bool, colors: &ThemeColors) -> Block<'a> {
    let border = if focused {
        colors.focus_border
    } else {
        colors.border
    };
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg))
}

fn draw_header(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let applied = app.controller.state().medal_color;
    let titles: Vec<Line<'_>> = app
        .color_options
        .iter()
        .map(|option| {
            let style = match option {
                crate::filter::ColorFilter::Only(c) => Style::default().fg(colors.medal(*c)),
                crate::filter::ColorFilter::All => Style::default().fg(colors.text),
            };
            let marker = if *option == applied { "● " } else { "" };
            Line::from(Span::styled(format!("{}{}", marker, option.label()), style))
        })
        .collect();

    let hints = format!(
        " a: {} | s: {} | e: {} ",
        ResetTarget::All.label(),
        ResetTarget::Sport.label(),
        ResetTarget::Year.label()
    );

    let block = panel_block(
        format!(" {} | Select a medal color: ", TITLE),
        app.focus == Focus::Selector,
        colors,
    )
    .title_bottom(Line::from(hints).alignment(Alignment::Right));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.selector_cursor)
        .style(Style::default().fg(colors.text))
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    f.render_widget(tabs, area);
}

fn draw_word_cloud(
    f: &mut Frame<'_>,
    app: &App,
    words: &[WordEntry],
    area: Rect,
    colors: &ThemeColors,
) {
    let focused = app.focus == Focus::Detail;
    let block = panel_block(" Wordcloud of Sport ".to_string(), focused, colors).title_bottom(
        Line::from(" Select a sport in the wordcloud to see associated disciplines ")
            .alignment(Alignment::Center),
    );

    if words.is_empty() {
        let paragraph = Paragraph::new("No medals match the current filter")
            .block(block)
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    // Word weight stands in for font size: bigger counts get stronger styles.
    let max = words.iter().map(|w| w.count).max().unwrap_or(1).max(1);
    let names: Vec<&str> = words.iter().map(|w| w.sport.as_str()).collect();
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line<'_>> = pack_words(&names, inner_width, 2)
        .into_iter()
        .map(|indices| {
            let mut spans = Vec::with_capacity(indices.len() * 2);
            for (n, idx) in indices.into_iter().enumerate() {
                if n > 0 {
                    spans.push(Span::raw("  "));
                }
                let word = &words[idx];
                let style = if focused && idx == app.word_cursor {
                    Style::default()
                        .fg(colors.cursor_fg)
                        .bg(colors.cursor_bg)
                        .add_modifier(Modifier::BOLD)
                } else if word.count * 3 >= max * 2 {
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD)
                } else if word.count * 3 >= max {
                    Style::default().fg(colors.value)
                } else {
                    Style::default()
                        .fg(colors.label)
                        .add_modifier(Modifier::DIM)
                };
                spans.push(Span::styled(word.sport.clone(), style));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_disciplines(
    f: &mut Frame<'_>,
    app: &App,
    table: &DisciplineTable,
    area: Rect,
    colors: &ThemeColors,
) {
    let focused = app.focus == Focus::Detail;
    let rows: Vec<Row<'_>> = table
        .rows
        .iter()
        .skip(app.discipline_scroll)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.discipline.clone()),
                Cell::from(r.name.clone()),
                Cell::from(r.medal_color.label()).style(Style::default().fg(colors.medal(r.medal_color))),
                Cell::from(r.year.to_string()),
            ])
        })
        .collect();

    let title = format!(" {} ({}) ", table.title(), format_number(table.rows.len()));
    let widths = app
        .layout
        .tables
        .discipline_weights
        .map(Constraint::Percentage);

    let widget = Table::new(rows, widths)
        .header(header_row(&DisciplineTable::COLUMNS, colors))
        .block(panel_block(title, focused, colors))
        .style(Style::default().fg(colors.text));

    f.render_widget(widget, area);
}

fn draw_medal_chart(
    f: &mut Frame<'_>,
    app: &App,
    chart: &MedalChart,
    area: Rect,
    colors: &ThemeColors,
) {
    let focused = app.focus == Focus::Chart;
    let block = panel_block(" Olympic Events ".to_string(), focused, colors).title_bottom(
        Line::from(format!(
            " {}: {} by {} ",
            MedalChart::TITLE,
            MedalChart::Y_LABEL,
            MedalChart::X_LABEL
        ))
        .alignment(Alignment::Center),
    );

    if chart.series.is_empty() {
        let paragraph = Paragraph::new("No medals match the current filter")
            .block(block)
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let config = &app.layout.chart;
    let slot = usize::from(config.bar_width + config.bar_gap).max(1);
    let visible = (area.width.saturating_sub(2) as usize / slot).max(1);
    let start = (app.chart_cursor + 1).saturating_sub(visible);
    let selected_year = app.controller.state().selected_year;

    let bars: Vec<Bar<'_>> = chart
        .series
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(idx, point)| {
            let style = if focused && idx == app.chart_cursor {
                Style::default().fg(colors.cursor_bg)
            } else if Some(point.year) == selected_year {
                Style::default().fg(colors.heading)
            } else {
                Style::default().fg(colors.bar)
            };
            Bar::default()
                .value(point.count as u64)
                .label(Line::from(point.year.to_string()))
                .style(style)
                .value_style(Style::default().fg(colors.cursor_fg).bg(colors.bar))
        })
        .collect();

    let widget = BarChart::default()
        .block(block)
        .bar_width(config.bar_width)
        .bar_gap(config.bar_gap)
        .max(chart.max_count() as u64)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(widget, area);
}

fn draw_medalists(
    f: &mut Frame<'_>,
    app: &App,
    table: &MedalistTable,
    area: Rect,
    colors: &ThemeColors,
) {
    let focused = app.focus == Focus::Medalists;
    let best_of = |person_id: &str| app.controller.dataset().rank_of(person_id).map(|r| r.placement);

    let rows: Vec<Row<'_>> = table
        .rows
        .iter()
        .enumerate()
        .skip(app.medalist_scroll)
        .map(|(idx, r)| {
            let name_style = match best_of(&r.person_id) {
                Some(color) => Style::default().fg(colors.medal(color)),
                None => Style::default().fg(colors.text),
            };
            let row = Row::new(vec![
                Cell::from(r.name.clone()).style(name_style),
                Cell::from(r.gender.clone()),
                Cell::from(r.date_of_birth.clone()),
                Cell::from(r.date_of_death.clone().unwrap_or_default()),
                Cell::from(r.place_of_birth.clone()),
                Cell::from(r.place_of_death.clone().unwrap_or_default()),
            ]);
            if focused && idx == app.medalist_scroll {
                row.style(
                    Style::default()
                        .fg(colors.cursor_fg)
                        .bg(colors.cursor_bg),
                )
            } else {
                row
            }
        })
        .collect();

    let title = format!(
        " Medalists ({}): Ordered by the number of {}, {} and {} medals ",
        format_number(table.rows.len()),
        MedalColor::Gold,
        MedalColor::Silver,
        MedalColor::Bronze
    );
    let widths = app
        .layout
        .tables
        .medalist_weights
        .map(Constraint::Percentage);

    let widget = Table::new(rows, widths)
        .header(header_row(&MedalistTable::COLUMNS, colors))
        .block(panel_block(title, focused, colors))
        .style(Style::default().fg(colors.text));

    f.render_widget(widget, area);
}

fn header_row<'a>(columns: &[&'static str], colors: &ThemeColors) -> Row<'a> {
    Row::new(columns.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(colors.label)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DashboardEvent;
    use crate::testing::sailing_and_rowing;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| draw_dashboard(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_word_cloud_before_a_sport_is_picked() {
        let app = App::new(Arc::new(sailing_and_rowing()));
        let screen = render(&app);

        assert!(screen.contains(TITLE));
        assert!(screen.contains("Wordcloud of Sport"));
        assert!(screen.contains("Rowing"));
        assert!(!screen.contains("Disciplines of"));
    }

    #[test]
    fn renders_discipline_table_in_detail_mode() {
        let mut app = App::new(Arc::new(sailing_and_rowing()));
        app.dispatch(DashboardEvent::SportClicked("Sailing".to_string()));
        let screen = render(&app);

        assert!(screen.contains("Disciplines of Sailing"));
        assert!(screen.contains("Soling"));
        assert!(!screen.contains("Wordcloud of Sport"));
    }
}
