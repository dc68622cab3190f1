//! The interactive surface: terminal setup, the frame loop, and
//! teardown. Raw mode and the alternate screen are held by a guard so
//! every exit path restores the user's terminal.

use crate::app::App;
use crate::config::AnimationSettings;
use anyhow::{Result, bail};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_types::Theme;
use is_terminal::IsTerminal;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

pub fn handle(theme: Theme, settings: AnimationSettings) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("'folio view' needs an interactive terminal; try 'folio section show <name>'");
    }

    let (cols, rows) = crossterm::terminal::size()?;
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(theme, settings, cols, rows);

    run_loop(&mut terminal, &mut app, settings.frame_interval())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(frame_interval)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(cols, rows) => app.handle_resize(cols, rows),
                _ => {}
            }
        }

        let now = Instant::now();
        app.on_tick(now, now - last_tick);
        last_tick = now;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state on every exit path
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
