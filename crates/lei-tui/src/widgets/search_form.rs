//! Search form: the title input and the six dropdown pickers.
//!
//! # Editing (when the form is focused)
//!
//! | Key | Title input | Dropdown picker |
//! |-----|-------------|-----------------|
//! | printable char | insert at cursor | ignored |
//! | `Backspace` | delete before cursor | reset to `-- Any --` |
//! | `←` / `→` | move cursor | previous / next value |
//! | `↑` / `↓` | previous / next field | previous / next field |
//!
//! A picker cycles `-- Any --` → first value → … → last value → `-- Any --`.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use lei_core::dropdown::Dropdown;
use lei_core::html::ANY_OPTION;
use lei_core::{Query, SearchField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const LABEL_WIDTH: u16 = 14;
const TITLE_HINT: &str = "parole, \"frasi\", jolly*";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// One dropdown: the field it constrains and the values it offers.
#[derive(Debug, Clone)]
pub struct Picker {
    pub field: SearchField,
    pub values: Vec<String>,
    /// Index into `values`; `None` is the unconstrained option.
    pub selected: Option<usize>,
}

impl Picker {
    pub fn new(field: SearchField, values: Vec<String>) -> Self {
        Self { field, values, selected: None }
    }

    /// The chosen value, or `""` when unconstrained.
    pub fn value(&self) -> &str {
        self.selected.map_or("", |i| self.values[i].as_str())
    }

    pub fn next(&mut self) {
        self.selected = match self.selected {
            None if self.values.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.values.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn prev(&mut self) {
        self.selected = match self.selected {
            None => self.values.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

#[derive(Debug, Default)]
pub struct SearchFormState {
    /// Free-text title criterion.
    pub title: String,
    /// Byte offset of the cursor within `title`.
    pub cursor: usize,
    pub pickers: Vec<Picker>,
    /// Active field: `0` is the title input, `1..` the pickers in order.
    pub active: usize,
}

impl SearchFormState {
    /// One picker per dropdown field; fields missing from `dropdowns` get an
    /// empty picker so the form layout never changes.
    pub fn from_dropdowns(dropdowns: &[Dropdown]) -> Self {
        let pickers = SearchField::DROPDOWNS
            .iter()
            .map(|&field| {
                let values = dropdowns
                    .iter()
                    .find(|d| d.field == field)
                    .map(|d| d.values.clone())
                    .unwrap_or_default();
                Picker::new(field, values)
            })
            .collect();
        Self { pickers, ..Self::default() }
    }

    pub fn field_count(&self) -> usize {
        1 + self.pickers.len()
    }

    pub fn is_title_active(&self) -> bool {
        self.active == 0
    }

    /// Advance to the next field. Returns `false` (and stays put) when the
    /// last field is already active, so the shell can move focus on.
    pub fn focus_next(&mut self) -> bool {
        if self.active + 1 < self.field_count() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Step back one field. Returns `false` on the title input.
    pub fn focus_prev(&mut self) -> bool {
        if self.active > 0 {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// The query the form currently describes.
    pub fn query(&self) -> Query {
        self.pickers.iter().fold(
            Query::new().field(SearchField::Title, self.title.clone()),
            |q, p| q.field(p.field, p.value()),
        )
    }

    /// Reset every criterion and return to the title input.
    pub fn clear(&mut self) {
        self.title.clear();
        self.cursor = 0;
        for p in &mut self.pickers {
            p.selected = None;
        }
        self.active = 0;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.focus_prev();
            }
            AppEvent::Nav(Direction::Down) => {
                self.focus_next();
            }
            _ if self.is_title_active() => self.edit_title(event),
            _ => self.edit_picker(event),
        }
    }

    fn edit_title(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.title.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(title = %self.title, cursor = self.cursor, "form: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.title[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.title.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.title[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.title.len() {
                    self.cursor = self.title[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.title.len());
                }
            }
            _ => {}
        }
    }

    fn edit_picker(&mut self, event: &AppEvent) {
        let Some(picker) = self.pickers.get_mut(self.active - 1) else {
            return;
        };
        match event {
            AppEvent::Nav(Direction::Left) => picker.prev(),
            AppEvent::Nav(Direction::Right) => picker.next(),
            AppEvent::Backspace => picker.selected = None,
            _ => return,
        }
        tracing::debug!(field = %picker.field, value = picker.value(), "form: picker changed");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchForm<'a> {
    state: &'a SearchFormState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchForm<'a> {
    /// Rows needed to show every field inside the border.
    pub const HEIGHT: u16 = 2 + SearchField::ALL.len() as u16;

    pub fn new(state: &'a SearchFormState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the title cursor. Pass to
    /// `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = self.state.title[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + LABEL_WIDTH + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }

    fn label(&self, index: usize, text: &str) -> Span<'static> {
        let style = if self.focused && self.state.active == index {
            self.theme.form_active
        } else {
            self.theme.form_label
        };
        Span::styled(format!("{:<width$}", text, width = LABEL_WIDTH as usize), style)
    }
}

impl Widget for SearchForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Cerca ")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(self.state.field_count());

        let title_value = if self.state.title.is_empty() && !(self.focused && self.state.is_title_active()) {
            Span::styled(TITLE_HINT, self.theme.form_placeholder)
        } else {
            Span::styled(self.state.title.clone(), self.theme.form_value)
        };
        lines.push(Line::from(vec![self.label(0, SearchField::Title.label()), title_value]));

        for (i, picker) in self.state.pickers.iter().enumerate() {
            let index = i + 1;
            let value = match picker.selected {
                None => Span::styled(ANY_OPTION, self.theme.form_placeholder),
                Some(_) => Span::styled(picker.value().to_string(), self.theme.form_value),
            };
            let mut spans = vec![self.label(index, picker.field.label())];
            if self.focused && self.state.active == index {
                spans.push(Span::raw("◂ "));
                spans.push(value);
                spans.push(Span::raw(format!(" ▸  ({})", picker.values.len())));
            } else {
                spans.push(value);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
