//! Application state and logic.

use std::sync::Arc;

use crate::controller::{Controller, DashboardEvent, ResetTarget};
use crate::data::Dataset;
use crate::filter::ColorFilter;
use crate::util::{copy_table, LayoutConfig};
use crate::views::{DetailPanel, Snapshot, TableView};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Widget that receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Medal color selector.
    Selector,
    /// Word cloud, or the discipline table in detail mode.
    Detail,
    /// Medal count chart.
    Chart,
    /// Medalist table.
    Medalists,
}

impl Focus {
    /// Next widget in tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::Selector => Focus::Detail,
            Focus::Detail => Focus::Chart,
            Focus::Chart => Focus::Medalists,
            Focus::Medalists => Focus::Selector,
        }
    }

    /// Previous widget in tab order.
    pub fn prev(self) -> Self {
        match self {
            Focus::Selector => Focus::Medalists,
            Focus::Detail => Focus::Selector,
            Focus::Chart => Focus::Detail,
            Focus::Medalists => Focus::Chart,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Filter controller for this session.
    pub controller: Controller,
    /// Options of the color selector.
    pub color_options: Vec<ColorFilter>,
    /// Focused widget.
    pub focus: Focus,
    /// Highlighted selector option.
    pub selector_cursor: usize,
    /// Highlighted word of the cloud.
    pub word_cursor: usize,
    /// Highlighted bar of the chart.
    pub chart_cursor: usize,
    /// First visible row of the discipline table.
    pub discipline_scroll: usize,
    /// First visible row of the medalist table.
    pub medalist_scroll: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout configuration.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance over a loaded dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let color_options = dataset.color_options();
        let controller = Controller::new(dataset);
        let selector_cursor = color_options
            .iter()
            .position(|c| *c == controller.state().medal_color)
            .unwrap_or(0);

        let mut app = Self {
            controller,
            color_options,
            focus: Focus::Detail,
            selector_cursor,
            word_cursor: 0,
            chart_cursor: 0,
            discipline_scroll: 0,
            medalist_scroll: 0,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            layout: LayoutConfig::default(),
        };
        app.clamp_cursors();
        app
    }

    /// Views for the current filter.
    pub fn snapshot(&self) -> &Snapshot {
        self.controller.snapshot()
    }

    /// Move focus to the next widget.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous widget.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move the cursor of the focused widget backwards.
    pub fn cursor_back(&mut self) {
        match self.focus {
            Focus::Selector => self.selector_cursor = self.selector_cursor.saturating_sub(1),
            Focus::Detail => match self.snapshot().detail_panel() {
                DetailPanel::WordCloud => self.word_cursor = self.word_cursor.saturating_sub(1),
                DetailPanel::Disciplines => {
                    self.discipline_scroll = self.discipline_scroll.saturating_sub(1)
                },
            },
            Focus::Chart => self.chart_cursor = self.chart_cursor.saturating_sub(1),
            Focus::Medalists => self.medalist_scroll = self.medalist_scroll.saturating_sub(1),
        }
        self.describe_cursor();
    }

    /// Move the cursor of the focused widget forwards.
    pub fn cursor_forward(&mut self) {
        match self.focus {
            Focus::Selector => self.selector_cursor += 1,
            Focus::Detail => match self.snapshot().detail_panel() {
                DetailPanel::WordCloud => self.word_cursor += 1,
                DetailPanel::Disciplines => self.discipline_scroll += 1,
            },
            Focus::Chart => self.chart_cursor += 1,
            Focus::Medalists => self.medalist_scroll += 1,
        }
        self.clamp_cursors();
        self.describe_cursor();
    }

    /// Activate the highlighted item: pick a color, click a word or a bar.
    pub fn activate(&mut self) {
        let event = match self.focus {
            Focus::Selector => self
                .color_options
                .get(self.selector_cursor)
                .map(|c| DashboardEvent::ColorSelected(*c)),
            Focus::Detail => self
                .snapshot()
                .word_cloud
                .get(self.word_cursor)
                .map(|w| DashboardEvent::SportClicked(w.sport.clone())),
            Focus::Chart => self
                .snapshot()
                .medal_chart
                .series
                .get(self.chart_cursor)
                .map(|p| DashboardEvent::YearClicked(p.year)),
            Focus::Medalists => None,
        };

        match event {
            Some(event) => self.dispatch(event),
            None => self.status = "Nothing to select here".to_string(),
        }
    }

    /// Press one of the reset buttons.
    pub fn reset(&mut self, target: ResetTarget) {
        self.dispatch(DashboardEvent::Reset(target));
        if target == ResetTarget::All {
            self.selector_cursor = self
                .color_options
                .iter()
                .position(|c| *c == ColorFilter::All)
                .unwrap_or(0);
        }
    }

    /// Send an event to the controller and refresh the cursors.
    pub fn dispatch(&mut self, event: DashboardEvent) {
        let status = match &event {
            DashboardEvent::ColorSelected(color) => format!("Medal color: {}", color),
            DashboardEvent::YearClicked(year) => format!("Olympic event: {}", year),
            DashboardEvent::SportClicked(sport) => format!("Sport: {}", sport),
            DashboardEvent::Reset(target) => target.label().to_string(),
        };

        let entering_detail = matches!(event, DashboardEvent::SportClicked(_));
        self.controller.dispatch(event);

        if entering_detail {
            self.discipline_scroll = 0;
        }
        self.clamp_cursors();

        // Keep the highlighted bar on the selected event.
        let snapshot = self.controller.snapshot();
        if let Some(position) = snapshot
            .state
            .selected_year
            .and_then(|y| snapshot.medal_chart.position_of(y))
        {
            self.chart_cursor = position;
        }
        self.status = status;
    }

    /// Table shown by the focused widget, if it is a table.
    pub fn focused_table(&self) -> Option<TableView> {
        let snapshot = self.snapshot();
        match self.focus {
            Focus::Detail => snapshot.disciplines.as_ref().map(|t| t.to_table()),
            Focus::Medalists => Some(snapshot.medalists.to_table()),
            Focus::Selector | Focus::Chart => None,
        }
    }

    /// Copy the focused table to the clipboard.
    pub fn copy_focused_table(&mut self) {
        let Some(table) = self.focused_table() else {
            self.status = "Focus a table to copy it".to_string();
            return;
        };

        match copy_table(&table) {
            Ok(rows) => self.status = format!("Copied {} rows of '{}'", rows, table.title),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show the key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = "Help: Tab=focus, h/l=move, Enter=select, a/s/e=reset all/sport/event, y=copy table, T=theme, q=quit".to_string();
    }

    /// Keep every cursor inside its (possibly narrowed) view.
    fn clamp_cursors(&mut self) {
        let snapshot = self.controller.snapshot();
        let words = snapshot.word_cloud.len();
        let bars = snapshot.medal_chart.series.len();
        let disciplines = snapshot.disciplines.as_ref().map_or(0, |t| t.rows.len());
        let medalists = snapshot.medalists.rows.len();

        self.selector_cursor = clamp(self.selector_cursor, self.color_options.len());
        self.word_cursor = clamp(self.word_cursor, words);
        self.chart_cursor = clamp(self.chart_cursor, bars);
        self.discipline_scroll = clamp(self.discipline_scroll, disciplines);
        self.medalist_scroll = clamp(self.medalist_scroll, medalists);
    }

    /// Show what the cursor points at, like a hover label.
    fn describe_cursor(&mut self) {
        let snapshot = self.controller.snapshot();
        let text = match self.focus {
            Focus::Selector => self
                .color_options
                .get(self.selector_cursor)
                .map(|c| format!("Select a medal color: {}", c)),
            Focus::Detail => snapshot
                .word_cloud
                .get(self.word_cursor)
                .map(|w| w.label.clone()),
            Focus::Chart => snapshot
                .medal_chart
                .series
                .get(self.chart_cursor)
                .map(|p| format!("{}: {} medals", p.year, p.count)),
            Focus::Medalists => None,
        };
        if let Some(text) = text {
            self.status = text;
        }
    }
}

fn clamp(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MedalColor;
    use crate::testing::sailing_and_rowing;

    fn app() -> App {
        App::new(Arc::new(sailing_and_rowing()))
    }

    #[test]
    fn selector_starts_on_all() {
        let app = app();
        assert_eq!(app.color_options[app.selector_cursor], ColorFilter::All);
    }

    #[test]
    fn activating_a_word_enters_detail_mode() {
        let mut app = app();
        app.focus = Focus::Detail;
        app.activate();

        assert_eq!(
            app.controller.state().selected_sport.as_deref(),
            Some("Sailing")
        );
        assert_eq!(app.snapshot().detail_panel(), DetailPanel::Disciplines);
        assert_eq!(app.status, "Sport: Sailing");
    }

    #[test]
    fn chart_cursor_follows_selected_year() {
        let mut app = app();
        app.dispatch(DashboardEvent::YearClicked(2000));
        let position = app.snapshot().medal_chart.position_of(2000);
        assert_eq!(Some(app.chart_cursor), position);
    }

    #[test]
    fn cursors_are_clamped_when_views_shrink() {
        let mut app = app();
        app.focus = Focus::Detail;
        app.cursor_forward();
        app.cursor_forward();
        app.cursor_forward();
        assert_eq!(app.word_cursor, 1);

        app.dispatch(DashboardEvent::ColorSelected(ColorFilter::Only(
            MedalColor::Bronze,
        )));
        assert!(app.word_cursor < app.snapshot().word_cloud.len().max(1));
    }

    #[test]
    fn reset_all_returns_selector_to_all() {
        let mut app = app();
        app.focus = Focus::Selector;
        app.selector_cursor = 0;
        app.activate();
        assert_ne!(app.controller.state().medal_color, ColorFilter::All);

        app.reset(ResetTarget::All);
        assert_eq!(app.controller.state().medal_color, ColorFilter::All);
        assert_eq!(app.color_options[app.selector_cursor], ColorFilter::All);
    }

    #[test]
    fn copy_needs_a_table() {
        let mut app = app();
        app.focus = Focus::Chart;
        assert!(app.focused_table().is_none());
        app.copy_focused_table();
        assert_eq!(app.status, "Focus a table to copy it");

        app.focus = Focus::Medalists;
        assert!(app.focused_table().is_some());
    }
}
