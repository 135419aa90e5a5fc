//! # mc-core
//!
//! Core domain models and ports for multiclip.
//!
//! This crate contains the slot model and the contracts the outer layers
//! implement. It has no OS or file-system dependencies.

pub mod config;
pub mod hotkey;
pub mod notification;
pub mod ports;
pub mod slot;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use hotkey::{HotkeyAction, HotkeyBinding, Key, KeyCombo, Modifiers};
pub use notification::{NotificationEvent, NotificationReceiver, NotificationSender, UiRequest};
pub use slot::{SlotContents, SlotIndex, SlotStore, SLOT_COUNT};
