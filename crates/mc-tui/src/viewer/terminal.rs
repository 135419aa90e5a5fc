use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::bootstrap::tracing::ConsoleGate;

use super::render;
use super::state::ViewerState;

type ViewerBackend = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode + alternate screen while the viewer is visible, the normal
/// screen (and console log lines) otherwise.
pub struct ViewerTerminal {
    terminal: Option<ViewerBackend>,
    gate: ConsoleGate,
}

impl ViewerTerminal {
    pub fn new(gate: ConsoleGate) -> Self {
        Self {
            terminal: None,
            gate,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }
        info!("Opening viewer");
        // Silence the console before the screen switches so no line lands
        // inside the alternate screen.
        self.gate.suppress();

        let terminal = setup_terminal().inspect_err(|_| {
            let _ = disable_raw_mode();
            self.gate.release();
        })?;
        self.terminal = Some(terminal);

        let discarded = discard_pending_input()?;
        if discarded > 0 {
            debug!(discarded, "Dropped input typed before the viewer opened");
        }
        Ok(())
    }

    pub fn leave(&mut self) -> Result<()> {
        let Some(mut terminal) = self.terminal.take() else {
            return Ok(());
        };
        let result = cleanup_terminal(&mut terminal);
        self.gate.release();
        info!("Viewer hidden; ctrl+alt+b shows it again, Ctrl+C quits");
        result
    }

    pub fn draw(&mut self, state: &ViewerState, location: &str) -> Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        terminal
            .draw(|frame| render::draw(frame, state, location))
            .context("Failed to draw viewer")?;
        Ok(())
    }
}

impl Drop for ViewerTerminal {
    fn drop(&mut self) {
        if let Some(mut terminal) = self.terminal.take() {
            let _ = cleanup_terminal(&mut terminal);
            self.gate.release();
        }
    }
}

fn setup_terminal() -> Result<ViewerBackend> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear().context("Failed to clear terminal")?;

    debug!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut ViewerBackend) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    debug!("Terminal cleanup complete");
    Ok(())
}

/// Input typed while the viewer was hidden is thrown away, never replayed
/// as viewer commands.
fn discard_pending_input() -> Result<usize> {
    drain_pending(|| event::poll(Duration::ZERO), event::read)
        .context("Failed to discard pending terminal input")
}

fn drain_pending<T>(
    mut poll: impl FnMut() -> io::Result<bool>,
    mut read: impl FnMut() -> io::Result<T>,
) -> io::Result<usize> {
    let mut discarded = 0;
    while poll()? {
        read()?;
        discarded += 1;
    }
    Ok(discarded)
}

/// Restores the normal screen before the default panic output is printed.
///
/// Only a panic on the UI thread tears the viewer down. Shortcut handler
/// panics are caught and logged on the hotkey thread, so their default
/// output is dropped while the viewer owns the screen.
pub fn setup_panic_handler(gate: ConsoleGate) {
    let original_hook = std::panic::take_hook();
    let ui_thread = std::thread::current().id();

    std::panic::set_hook(Box::new(move |panic_info| {
        if std::thread::current().id() == ui_thread {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            gate.release();
        } else if gate.is_suppressed() {
            return;
        }

        original_hook(panic_info);
    }));
}
