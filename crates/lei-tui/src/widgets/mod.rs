//! Ratatui widgets for the lei-search TUI.

pub mod command_bar;
pub mod help;
pub mod results;
pub mod search_form;
pub mod status_line;
pub mod title_bar;
