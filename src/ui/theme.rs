//! Color themes for the UI.

use crate::app::Theme;
use crate::data::MedalColor;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused widget.
    pub focus_border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Bar color of the medal chart.
    pub bar: Color,
    /// Gold medal color.
    pub gold: Color,
    /// Silver medal color.
    pub silver: Color,
    /// Bronze medal color.
    pub bronze: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                focus_border: Color::Rgb(131, 165, 152),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                bar: Color::Rgb(131, 165, 152),
                gold: Color::Rgb(250, 189, 47),
                silver: Color::Rgb(189, 174, 147),
                bronze: Color::Rgb(214, 93, 14),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                focus_border: Color::Rgb(7, 102, 120),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                bar: Color::Rgb(7, 102, 120),
                gold: Color::Rgb(181, 118, 20),
                silver: Color::Rgb(124, 111, 100),
                bronze: Color::Rgb(175, 58, 3),
            },
        }
    }

    /// Color used for a medal.
    pub fn medal(&self, color: MedalColor) -> Color {
        match color {
            MedalColor::Gold => self.gold,
            MedalColor::Silver => self.silver,
            MedalColor::Bronze => self.bronze,
        }
    }
}
