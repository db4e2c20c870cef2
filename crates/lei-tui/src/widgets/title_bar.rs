//! Title bar: one line at the top: dataset name and row count on the left,
//! keybinding hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct TitleBar<'a> {
    source: &'a str,
    rows: usize,
    loaded: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(source: &'a str, rows: usize, loaded: bool) -> Self {
        Self { source, rows, loaded }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = if self.loaded {
            format!("{} righe", self.rows)
        } else {
            "dati non caricati".to_string()
        };
        let line = Line::from(vec![
            Span::styled(" LEI Latinismi ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("│ {} │ {count}", self.source),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = " Enter:cerca  Tab:campo  ?:aiuto  q:esci ";
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}
