use std::fmt;

use crate::slot::SlotIndex;

use super::combo::{Key, KeyCombo, Modifiers};

/// What a global shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    CopyToSlot(SlotIndex),
    PasteFromSlot(SlotIndex),
    ShowViewer,
    ClearAll,
    Save,
    Quit,
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotkeyAction::CopyToSlot(index) => write!(f, "copy to slot {index}"),
            HotkeyAction::PasteFromSlot(index) => write!(f, "paste from slot {index}"),
            HotkeyAction::ShowViewer => f.write_str("show all slots"),
            HotkeyAction::ClearAll => f.write_str("clear all slots"),
            HotkeyAction::Save => f.write_str("save slots"),
            HotkeyAction::Quit => f.write_str("quit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub combo: KeyCombo,
    pub action: HotkeyAction,
}

impl HotkeyBinding {
    pub const fn new(combo: KeyCombo, action: HotkeyAction) -> Self {
        Self { combo, action }
    }
}

/// The fixed shortcut table: ten copy, ten paste, then show, clear, save, quit.
///
/// Slot 10 copies on `ctrl+0`; its paste key is configurable because
/// `ctrl+shift+0` is taken by some desktops and layouts.
pub fn default_bindings(slot10_paste_key: Key) -> Vec<HotkeyBinding> {
    let copy = SlotIndex::all().map(|index| {
        HotkeyBinding::new(
            KeyCombo::new(Modifiers::CTRL, Key::Digit(index.digit())),
            HotkeyAction::CopyToSlot(index),
        )
    });

    let paste = SlotIndex::all().map(|index| {
        let key = if index.digit() == 0 {
            slot10_paste_key
        } else {
            Key::Digit(index.digit())
        };
        HotkeyBinding::new(
            KeyCombo::new(Modifiers::CTRL_SHIFT, key),
            HotkeyAction::PasteFromSlot(index),
        )
    });

    let control = [
        ('B', HotkeyAction::ShowViewer),
        ('C', HotkeyAction::ClearAll),
        ('S', HotkeyAction::Save),
        ('Q', HotkeyAction::Quit),
    ]
    .into_iter()
    .map(|(letter, action)| {
        HotkeyBinding::new(KeyCombo::new(Modifiers::CTRL_ALT, Key::Letter(letter)), action)
    });

    copy.chain(paste).chain(control).collect()
}
