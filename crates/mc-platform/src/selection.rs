use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use mc_core::ports::{SelectionActionError, SelectionActionPort};
use tracing::debug;

/// Sends Ctrl+C / Ctrl+V to the focused window through enigo.
///
/// The shortcut that triggered us is usually still physically held, so
/// Shift and Alt are released first; otherwise the target application would
/// see Ctrl+Shift+V or Ctrl+Alt+C.
#[derive(Debug, Default)]
pub struct EnigoSelectionActions;

impl EnigoSelectionActions {
    pub fn new() -> Self {
        Self
    }

    fn chord(&self, letter: char) -> Result<(), SelectionActionError> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| SelectionActionError::Backend(e.to_string()))?;
        let input = |e: enigo::InputError| SelectionActionError::Input(e.to_string());

        enigo.key(Key::Shift, Direction::Release).map_err(input)?;
        enigo.key(Key::Alt, Direction::Release).map_err(input)?;

        enigo.key(Key::Control, Direction::Press).map_err(input)?;
        let clicked = enigo.key(Key::Unicode(letter), Direction::Click);
        // Never leave Control stuck down, even if the click failed.
        let released = enigo.key(Key::Control, Direction::Release);
        clicked.map_err(input)?;
        released.map_err(input)?;

        debug!(key = %letter, "sent ctrl+{letter}");
        Ok(())
    }
}

impl SelectionActionPort for EnigoSelectionActions {
    fn trigger_copy(&self) -> Result<(), SelectionActionError> {
        self.chord('c')
    }

    fn trigger_paste(&self) -> Result<(), SelectionActionError> {
        self.chord('v')
    }
}
