//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        results::{Results, ResultsState},
        search_form::{SearchForm, SearchFormState},
        status_line::{Status, StatusLine},
        title_bar::TitleBar,
    },
};
use anyhow::Context;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lei_core::{html, link::deep_link, Row, Session};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, path::Path, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Results,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub session: Session,
    pub form: SearchFormState,
    pub results: ResultsState,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub status: Option<Status>,
    pub quit: bool,
}

impl AppState {
    pub fn new(session: Session, theme: Theme) -> Self {
        let form = SearchFormState::from_dropdowns(session.dropdowns());
        Self {
            session,
            form,
            results: ResultsState::default(),
            focus: Focus::Form,
            prev_focus: Focus::Form,
            theme,
            show_help: false,
            command_bar: CommandBarState::default(),
            status: None,
            quit: false,
        }
    }

    /// Run the form's query and show the hits.
    pub fn run_search(&mut self) {
        let query = self.form.query();
        let hits = self.session.on_search_indices(&query);
        tracing::debug!(query = ?query, hits = hits.len(), "tui: search");
        let found = !hits.is_empty();
        self.results.set_hits(hits);
        self.status = None;
        if found {
            self.focus = Focus::Results;
        }
    }

    /// Rows currently listed in the results pane.
    pub fn result_rows(&self) -> Vec<&Row> {
        let rows = self.session.rows();
        self.results.hits().iter().filter_map(|&i| rows.get(i)).collect()
    }

    /// Deep link of the selected result row.
    pub fn selected_link(&self) -> Option<String> {
        let row = self.session.rows().get(self.results.selected()?)?;
        Some(deep_link(row, &self.session.config().links))
    }

    /// Write the current results as an HTML table; returns the row count.
    pub fn export_html(&self, path: &Path) -> anyhow::Result<usize> {
        let rows = self.result_rows();
        let doc = html::render_table(&rows, self.session.headers(), self.session.config());
        std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
        Ok(rows.len())
    }

    /// True when a text widget has the keys, so letters type instead of
    /// triggering shortcuts.
    fn is_insert_mode(&self) -> bool {
        match self.focus {
            Focus::Command => true,
            Focus::Form => self.form.is_title_active(),
            Focus::Results => false,
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        App { state: AppState::new(session, theme) }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if self.state.is_insert_mode() {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let insert = self.state.is_insert_mode();
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        if s.focus == Focus::Command {
            handle_command_bar(s, event);
            return;
        }

        match event {
            AppEvent::Char('?') if !insert => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if !insert => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Enter => s.run_search(),

            AppEvent::Escape => {
                if s.focus == Focus::Form {
                    s.focus = Focus::Results;
                }
            }

            // Form fields in order, then the results, then back to the title.
            AppEvent::FocusNext => match s.focus {
                Focus::Form if s.form.focus_next() => {}
                Focus::Form => s.focus = Focus::Results,
                _ => {
                    s.focus = Focus::Form;
                    s.form.active = 0;
                }
            },
            AppEvent::FocusPrev => match s.focus {
                Focus::Form if s.form.focus_prev() => {}
                Focus::Form => s.focus = Focus::Results,
                _ => {
                    s.focus = Focus::Form;
                    s.form.active = s.form.field_count() - 1;
                }
            },

            AppEvent::TitleFocus => {
                s.focus = Focus::Form;
                s.form.active = 0;
            }

            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Form => s.form.handle(&other),
                Focus::Results => s.results.handle(&other),
                Focus::Command => {}
            },
        }
    }
}

fn handle_command_bar(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => match Command::parse(&s.command_bar.input) {
            Ok(cmd) => {
                tracing::debug!(command = ?cmd, "executing command");
                s.command_bar.clear();
                s.focus = s.prev_focus;
                execute_command(s, cmd);
            }
            Err(msg) if msg.is_empty() => {
                s.command_bar.clear();
                s.focus = s.prev_focus;
            }
            Err(msg) => s.command_bar.error = Some(msg),
        },
        AppEvent::Quit => s.quit = true,
        other => s.command_bar.handle(&other),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // title bar | search form | results | status line
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(SearchForm::HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let session = &state.session;
    frame.render_widget(
        TitleBar::new(&session.config().data.source, session.rows().len(), session.is_loaded()),
        vert[0],
    );

    let form = SearchForm::new(&state.form, state.focus == Focus::Form, &state.theme);
    let title_cursor = form.cursor_position(vert[1]);
    frame.render_widget(form, vert[1]);
    frame.render_widget(
        Results::new(
            &state.results,
            session.rows(),
            session.headers(),
            state.focus == Focus::Results,
            &state.theme,
        ),
        vert[2],
    );

    let link = state.selected_link();
    frame.render_widget(
        StatusLine::new(link.as_deref(), state.status.as_ref(), &state.theme),
        vert[3],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the status line
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Form && state.form.is_title_active() {
        frame.set_cursor_position(title_cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
