//! Global shortcuts through the `global-hotkey` crate.
//!
//! The registrar must be created, pumped and dropped on one thread. On
//! Windows that thread also has to drain its message queue, which
//! [`GlobalHotkeyRegistrar::pump`] does between waits. macOS delivers events
//! only to an application run loop on the main thread, which this terminal
//! program does not have.

mod keymap;
mod registrar;
mod wait;

pub use keymap::to_hotkey;
pub use registrar::GlobalHotkeyRegistrar;
