//! # mc-platform
//!
//! Operating-system adapters for multiclip.
//!
//! Every type here implements a port from `mc_core::ports`: the system
//! clipboard, simulated copy/paste keystrokes, global shortcuts and the
//! per-user application directories.

pub mod app_dirs;
pub mod clipboard;
pub mod hotkey;
pub mod selection;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::LocalClipboard;
pub use hotkey::GlobalHotkeyRegistrar;
pub use selection::EnigoSelectionActions;
