mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use crate::config::Config;
use app::AppState;
use plaza_types::seed_posts;

/// Run the interactive feed viewer until the user quits.
///
/// All state lives in one `AppState`; every key event is handled to
/// completion before the next frame is drawn.
pub fn run(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let use_alt_screen = config.alternate_screen;
    if use_alt_screen {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        if use_alt_screen {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
        std::process::exit(0);
    })?;

    let mut app_state = AppState::new(seed_posts());
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    while !app_state.should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app_state.handle_key(key);
                }
            }
        }
    }

    disable_raw_mode()?;
    if use_alt_screen {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    Ok(())
}
