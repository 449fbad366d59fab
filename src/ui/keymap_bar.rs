//! Keymap help bar UI component.

use crate::app::Focus;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, focus: Focus, colors: &ThemeColors) {
    let keymap_text = match focus {
        Focus::Selector => "h/l:option | Enter:apply color | Tab:focus | a:reset all | q:quit",
        Focus::Detail => {
            "h/l:word | Enter:select sport | s:reset sport | y:copy | Tab:focus | a:reset all | q:quit"
        },
        Focus::Chart => {
            "h/l:bar | Enter:select event | e:reset event | Tab:focus | a:reset all | q:quit"
        },
        Focus::Medalists => "j/k:scroll | y:copy | Tab:focus | T:theme | ?:help | q:quit",
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
