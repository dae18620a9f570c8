//! TUI rendering and terminal management (impure shell)

pub mod layout;
pub mod pager;
pub mod prompt;
pub mod styles;

pub use pager::PagerView;
pub use prompt::PromptLine;

use crate::config::{BellStyle, KeyBindings};
use crate::model::AppError;
use crate::source::Explainer;
use crate::state::{Outcome, Session};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use tracing::{debug, info};

/// Startup options for the pager.
#[derive(Debug, Clone)]
pub struct PagerArgs {
    /// Target looked up before the first frame.
    pub initial_target: String,
    /// How boundary no-ops are signalled.
    pub bell: BellStyle,
    /// Normal-mode key bindings.
    pub bindings: KeyBindings,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    session: Session,
    bell: BellStyle,
    /// Visual bell pending: status row is drawn reversed until the next key.
    flash: bool,
    /// Audible bell pending: BEL is written after the next draw.
    beep: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, then runs the
    /// initial lookup.
    pub fn new(explainer: Box<dyn Explainer>, args: PagerArgs) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, explainer, args)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal input; every
    /// key or resize is followed by one redraw.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(_, rows) => self.handle_resize(rows),
                _ => continue,
            }

            self.draw()?;
            if std::mem::take(&mut self.beep) {
                let mut stdout = io::stdout();
                stdout.write_all(b"\x07")?;
                stdout.flush()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app over an already-initialized terminal.
    ///
    /// The viewport height is taken from the terminal size.
    pub(crate) fn with_terminal(
        terminal: Terminal<B>,
        explainer: Box<dyn Explainer>,
        args: PagerArgs,
    ) -> Result<Self, AppError> {
        let rows = terminal.size()?.height;
        let mut session = Session::new(explainer, args.bindings, layout::pager_height(rows));
        session.lookup(&args.initial_target);

        Ok(Self {
            terminal,
            session,
            bell: args.bell,
            flash: false,
            beep: false,
        })
    }

    /// Handle keyboard input
    ///
    /// Returns true if app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        self.flash = false;

        match self.session.handle_key(key) {
            Outcome::Quit => {
                info!("Quit requested");
                true
            }
            Outcome::Bell => {
                self.ring();
                false
            }
            Outcome::Continue => false,
        }
    }

    fn ring(&mut self) {
        debug!(bell = ?self.bell, "Bell");
        match self.bell {
            BellStyle::Audible => self.beep = true,
            BellStyle::Visual => self.flash = true,
            BellStyle::Silent => {}
        }
    }

    fn handle_resize(&mut self, rows: u16) {
        debug!(rows, "Handling resize");
        self.session.set_height(layout::pager_height(rows));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), AppError> {
        let session = &self.session;
        let flash = self.flash;
        self.terminal
            .draw(|frame| layout::render(frame, session, flash))?;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal setup, runs
/// the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(explainer: Box<dyn Explainer>, args: PagerArgs) -> Result<(), AppError> {
    let mut app = match TuiApp::new(explainer, args) {
        Ok(app) => app,
        Err(e) => {
            // Setup may have failed after raw mode was enabled.
            let _ = restore_terminal();
            return Err(e);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
