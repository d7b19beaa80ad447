//! Terminal UI for word scramble.

mod app;
mod ui;

pub use app::{Alert, App, alert_for, start_failed_alert};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
///
/// The caller is responsible for routing logs away from the terminal.
#[instrument(skip(app), fields(started = app.session().is_some()))]
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting Word Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    if let Some(session) = app.session() {
        info!(
            score = %session.score(),
            words = session.used_words().len(),
            "Word Scramble TUI exited"
        );
    }
    res
}

/// Draw/input loop. One key press is handled at a time, so every session
/// mutation is serialized through this loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }

        if *app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
