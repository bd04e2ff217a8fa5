//! Interactive terminal portfolio.
//!
//! - `sections`: the tabbed top-level sections
//! - `app`: `PortfolioApp` state, keyboard and mouse handling
//! - `ui`: layout and drawing
//!
//! The event loop is single-threaded: poll for input with a short timeout,
//! handle whatever arrived, hand queued links to the system opener, redraw.

mod app;
mod sections;
mod ui;

pub use app::{ClickRegion, ClickTarget, PortfolioApp};
pub use sections::Section;
pub use ui::render;

use crate::error::Result;
use crate::links::open_in_browser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Input poll timeout; also the animation frame interval.
const FRAME_DURATION: Duration = Duration::from_millis(100);

/// Initialize the terminal for TUI mode.
pub fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Route one terminal event to the app.
pub fn handle_event(app: &mut PortfolioApp, event: Event) {
    match event {
        // Only key presses, not releases or repeats.
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                app.handle_click(mouse.column, mouse.row);
            }
        }
        // Resize is picked up by the next draw.
        _ => {}
    }
}

fn open_pending_links(app: &mut PortfolioApp) {
    for url in app.take_pending_links() {
        if let Err(e) = open_in_browser(&url) {
            tracing::warn!(error = %e, "could not open link");
        }
    }
}

/// Run the portfolio until the user quits.
pub fn run(mut app: PortfolioApp) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;
    tracing::info!("portfolio opened");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    tracing::info!("portfolio closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut PortfolioApp,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(FRAME_DURATION)? {
            handle_event(app, event::read()?);
        }
        open_pending_links(app);

        if app.should_quit() {
            return Ok(());
        }
    }
}
