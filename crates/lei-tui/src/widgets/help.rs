//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("Tab / Shift+Tab", "Next / previous field, then the results"),
    ("/", "Jump to the title input"),
    ("Escape", "Leave the title input"),
    ("↑ k  /  ↓ j", "Previous / next field or result row"),
    ("← h  /  → l", "Cycle dropdown values / move text cursor"),
    ("Backspace", "Delete a character / reset a dropdown"),
    ("Enter", "Run the search"),
    ("PageUp  /  Ctrl+u", "Results: one page up"),
    ("PageDown / Ctrl+d", "Results: one page down"),
    (":", "Command bar (q, help, theme, clear, export)"),
    ("?", "Toggle this help popup"),
];

const TITLE_SYNTAX: &[(&str, &str)] = &[
    ("word", "Title contains the word (any case)"),
    ("lin*", "`*` matches any run of characters"),
    ("\"de lingua\"", "Quoted phrase, matched as a substring"),
    ("a b", "Either word matches"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + TITLE_SYNTAX.len() + 5) as u16;
        let popup = centered_rect(72, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" lei-search — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let entry = |&(key, desc): &(&'static str, &'static str)| -> Line<'static> {
            Line::from(vec![
                Span::styled(format!("  {:<20}", key), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(desc),
            ])
        };

        let mut lines: Vec<Line> = BINDINGS.iter().map(entry).collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled("  Title syntax", self.theme.form_label));
        lines.extend(TITLE_SYNTAX.iter().map(entry));

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
