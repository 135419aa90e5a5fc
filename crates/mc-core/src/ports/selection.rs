use crate::ports::errors::SelectionActionError;

/// Simulated copy/paste keystrokes sent to the focused application.
pub trait SelectionActionPort: Send + Sync {
    /// Copies the current selection into the system clipboard.
    fn trigger_copy(&self) -> Result<(), SelectionActionError>;

    /// Pastes the system clipboard at the current input focus.
    fn trigger_paste(&self) -> Result<(), SelectionActionError>;
}
