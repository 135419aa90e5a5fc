//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `mc-app` and the
//! adapters in `mc-platform` / `mc-infra`. Use cases only ever see these
//! traits, so tests can swap every OS facility for an in-memory fake.

pub mod app_dirs;
mod clipboard;
pub mod errors;
mod hotkey;
mod selection;
mod slot_repository;

pub use app_dirs::{AppDirs, AppDirsPort};
pub use clipboard::SystemClipboardPort;
pub use errors::{
    AppDirsError, ClipboardError, HotkeyError, SelectionActionError, SlotRepositoryError,
};
pub use hotkey::{HotkeyHandler, HotkeyRegistrarPort};
pub use selection::SelectionActionPort;
pub use slot_repository::SlotRepositoryPort;
