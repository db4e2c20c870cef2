//! Results table: the rows matching the last search.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select the previous row |
//! | `↓` / `j` | Select the next row |
//! | `PageUp` / `Ctrl+u` | Move one page up |
//! | `PageDown` / `Ctrl+d` | Move one page down |
//!
//! `hits` holds indices into the session's rows, in load order. `offset` is
//! the first visible hit; the cursor is always kept inside the window.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use lei_core::fields;
use lei_core::Row;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{
        Block, Cell as TableCell, Paragraph, Row as TableRow, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Table, TableState, Widget,
    },
};

pub const NO_RESULTS: &str = "No results found.";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultsState {
    hits: Vec<usize>,
    /// Position of the selected hit within `hits`.
    pub cursor: usize,
    /// First visible hit.
    pub offset: usize,
    /// False until the first search, so the pane can say so.
    pub searched: bool,
    /// Visible body rows, cached from the last render.
    last_height: Cell<usize>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            hits: Vec::new(),
            cursor: 0,
            offset: 0,
            searched: false,
            last_height: Cell::new(20),
        }
    }
}

impl ResultsState {
    /// Replace the hits with a fresh search result and select the first.
    pub fn set_hits(&mut self, hits: Vec<usize>) {
        tracing::debug!(hits = hits.len(), "results: replaced");
        self.hits = hits;
        self.cursor = 0;
        self.offset = 0;
        self.searched = true;
    }

    pub fn clear(&mut self) {
        *self = Self { last_height: Cell::new(self.height()), ..Self::default() };
    }

    pub fn hits(&self) -> &[usize] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Row index (into the session's rows) of the selected hit.
    pub fn selected(&self) -> Option<usize> {
        self.hits.get(self.cursor).copied()
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn select(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.hits.len().saturating_sub(1));
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
        tracing::debug!(cursor = self.cursor, offset = self.offset, "results: moved");
    }

    pub fn handle(&mut self, event: &AppEvent) {
        if self.hits.is_empty() {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => self.select(self.cursor.saturating_sub(1)),
            AppEvent::Nav(Direction::Down) => self.select(self.cursor + 1),
            AppEvent::PageUp => self.select(self.cursor.saturating_sub(self.height())),
            AppEvent::PageDown => self.select(self.cursor + self.height()),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Results<'a> {
    state: &'a ResultsState,
    rows: &'a [Row],
    headers: &'a [String],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Results<'a> {
    pub fn new(
        state: &'a ResultsState,
        rows: &'a [Row],
        headers: &'a [String],
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, rows, headers, focused, theme }
    }
}

/// The title column gets most of the width; everything else shares the rest.
fn column_width(header: &str) -> Constraint {
    if header == fields::TITLE {
        Constraint::Fill(4)
    } else {
        Constraint::Fill(1)
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.searched {
            format!(" Risultati ({}) ", self.state.len())
        } else {
            " Risultati ".to_string()
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        // One row goes to the header.
        let height = (inner.height as usize).saturating_sub(1);
        self.state.last_height.set(height);

        if self.state.hits.is_empty() {
            let text = if self.state.searched {
                NO_RESULTS
            } else {
                "Enter: cerca"
            };
            Paragraph::new(Line::from(Span::styled(text, self.theme.table_empty)))
                .render(inner, buf);
            return;
        }

        let header = TableRow::new(self.headers.iter().map(|h| TableCell::from(h.as_str())))
            .style(self.theme.table_header);
        let body = self.state.hits.iter().filter_map(|&i| self.rows.get(i)).map(|row| {
            TableRow::new(row.cells_in(self.headers).map(TableCell::from))
        });
        let widths: Vec<Constraint> = self.headers.iter().map(|h| column_width(h)).collect();

        let table_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let mut table_state = TableState::new()
            .with_offset(self.state.offset)
            .with_selected(Some(self.state.cursor));
        StatefulWidget::render(
            Table::new(body, widths)
                .header(header)
                .column_spacing(1)
                .row_highlight_style(self.theme.table_selected),
            table_area,
            buf,
            &mut table_state,
        );

        let mut sb_state = ScrollbarState::new(self.state.len())
            .position(self.state.cursor)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
