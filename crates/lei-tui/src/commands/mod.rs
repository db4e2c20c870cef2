//! `:` commands.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `clear` | Reset the form and the results |
//! | `export <path>` | Write the current results as an HTML table |

use crate::app::AppState;
use crate::theme::{Theme, THEME_NAMES};
use crate::widgets::status_line::Status;
use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Clear,
    Export(PathBuf),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// An empty string returns `Err("")` as a sentinel meaning "close without
    /// acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "theme" if rest.is_empty() => {
                Err(format!("usage: theme <{}>", THEME_NAMES.join("|")))
            }
            "theme" => Ok(Command::Theme(rest.to_string())),
            "export" if rest.is_empty() => Err("usage: export <path>".to_string()),
            "export" => Ok(Command::Export(PathBuf::from(rest))),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => match Theme::by_name(&name) {
            Some(theme) => {
                s.theme = theme;
                s.status = Some(Status::Info(format!("theme: {name}")));
            }
            None => {
                s.status = Some(Status::Error(format!(
                    "unknown theme {name:?} (available: {})",
                    THEME_NAMES.join(", ")
                )));
            }
        },
        Command::Clear => {
            s.form.clear();
            s.results.clear();
            s.status = None;
        }
        Command::Export(path) => {
            s.status = Some(match s.export_html(&path) {
                Ok(n) => Status::Info(format!("{n} rows written to {}", path.display())),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "export failed");
                    Status::Error(format!("export failed: {e:#}"))
                }
            });
        }
    }
}
