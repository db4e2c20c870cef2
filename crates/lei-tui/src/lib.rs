//! lei-search TUI: ratatui front end over a loaded [`Session`].

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use lei_core::Session;
use theme::Theme;

/// Start the TUI on an already loaded session. Blocks until the user quits.
pub fn run(session: Session) -> anyhow::Result<()> {
    let name = session.config().ui.theme.clone();
    let theme = Theme::by_name(&name).unwrap_or_else(|| {
        tracing::warn!(theme = %name, "unknown theme, using default");
        Theme::load_default()
    });
    App::new(session, theme).run()
}
