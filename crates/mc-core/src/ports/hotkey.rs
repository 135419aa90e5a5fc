use std::time::Duration;

use crate::hotkey::KeyCombo;
use crate::ports::errors::HotkeyError;

/// Callback run when a registered combination is pressed.
pub type HotkeyHandler = Box<dyn Fn() + Send + Sync + 'static>;

/// OS global-shortcut facility.
///
/// Not `Send`: some platforms require the registrar to stay on the thread
/// that created it, so it is built and pumped on the hotkey thread.
pub trait HotkeyRegistrarPort {
    fn register(&mut self, combo: &KeyCombo, handler: HotkeyHandler) -> Result<(), HotkeyError>;

    fn unregister_all(&mut self);

    /// Runs the handlers of pending key presses, waiting at most `timeout`
    /// for the first one. Returns how many handlers ran.
    fn pump(&mut self, timeout: Duration) -> usize;
}
