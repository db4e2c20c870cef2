//! Status line: the selected row's deep link, or the outcome of the last
//! command.

use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, text::Span, widgets::Widget};

/// A transient message shown instead of the link until the next search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct StatusLine<'a> {
    link: Option<&'a str>,
    status: Option<&'a Status>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(link: Option<&'a str>, status: Option<&'a Status>, theme: &'a Theme) -> Self {
        Self { link, status, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = match (self.status, self.link) {
            (Some(Status::Error(msg)), _) => Span::styled(format!(" {msg}"), self.theme.status_error),
            (Some(Status::Info(msg)), _) => Span::styled(format!(" {msg}"), self.theme.status_message),
            (None, Some(link)) => Span::styled(format!(" 🔗 {link}"), self.theme.status_link),
            (None, None) => Span::raw(""),
        };
        buf.set_line(area.x, area.y, &Line::from(span), area.width);
    }
}
