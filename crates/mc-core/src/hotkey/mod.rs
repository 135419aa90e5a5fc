//! Global shortcut model: key combinations and the actions bound to them.

mod action;
mod combo;

pub use action::{default_bindings, HotkeyAction, HotkeyBinding};
pub use combo::{Key, KeyCombo, KeyComboParseError, Modifiers};
