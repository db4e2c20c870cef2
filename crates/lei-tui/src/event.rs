//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event              |
//! |-------------------------|--------------------|
//! | `q`, `Ctrl+c`           | `Quit`             |
//! | `Tab` / `Shift+Tab`     | `FocusNext` / `FocusPrev` |
//! | `/`                     | `TitleFocus`       |
//! | `PageUp`, `Ctrl+u`      | `PageUp`           |
//! | `PageDown`, `Ctrl+d`    | `PageDown`         |
//! | `↑` / `k`               | `Nav(Up)`          |
//! | `↓` / `j`               | `Nav(Down)`        |
//! | `←` / `h`               | `Nav(Left)`        |
//! | `→` / `l`               | `Nav(Right)`       |
//! | printable char          | `Char(c)`          |
//! | `Backspace`             | `Backspace`        |
//! | `Enter`                 | `Enter`            |
//! | terminal resize         | `Resize(w, h)`     |
//!
//! ## Insert mode
//!
//! While the title input or the command bar is focused the event loop calls
//! [`to_app_event_insert`]: hjkl, `q` and `/` type their characters, arrow
//! keys still navigate.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move focus to the next form field / pane.
    FocusNext,
    /// Move focus to the previous form field / pane.
    FocusPrev,
    /// Jump to the title input.
    TitleFocus,
    PageUp,
    PageDown,
    /// Cursor / selection movement.
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    Backspace,
    /// Run the search (form) or confirm (command bar).
    Enter,
    Resize(u16, u16),
    /// Dismiss the active modal or leave the text input.
    Escape,
}

/// Map a raw crossterm [`Event`] in navigation mode.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] while a text input has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::TitleFocus),

        PageUp => Some(AppEvent::PageUp),
        PageDown => Some(AppEvent::PageDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::PageUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::PageDown),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
