use global_hotkey::hotkey::{Code, HotKey, Modifiers as HkModifiers};
use mc_core::ports::HotkeyError;
use mc_core::{Key, KeyCombo, Modifiers};

const DIGITS: [Code; 10] = [
    Code::Digit0,
    Code::Digit1,
    Code::Digit2,
    Code::Digit3,
    Code::Digit4,
    Code::Digit5,
    Code::Digit6,
    Code::Digit7,
    Code::Digit8,
    Code::Digit9,
];

const LETTERS: [Code; 26] = [
    Code::KeyA,
    Code::KeyB,
    Code::KeyC,
    Code::KeyD,
    Code::KeyE,
    Code::KeyF,
    Code::KeyG,
    Code::KeyH,
    Code::KeyI,
    Code::KeyJ,
    Code::KeyK,
    Code::KeyL,
    Code::KeyM,
    Code::KeyN,
    Code::KeyO,
    Code::KeyP,
    Code::KeyQ,
    Code::KeyR,
    Code::KeyS,
    Code::KeyT,
    Code::KeyU,
    Code::KeyV,
    Code::KeyW,
    Code::KeyX,
    Code::KeyY,
    Code::KeyZ,
];

const FUNCTION_KEYS: [Code; 12] = [
    Code::F1,
    Code::F2,
    Code::F3,
    Code::F4,
    Code::F5,
    Code::F6,
    Code::F7,
    Code::F8,
    Code::F9,
    Code::F10,
    Code::F11,
    Code::F12,
];

fn to_code(key: Key) -> Option<Code> {
    match key {
        Key::Digit(d) => DIGITS.get(usize::from(d)).copied(),
        Key::Letter(c) if c.is_ascii_uppercase() => {
            LETTERS.get(usize::from(c as u8 - b'A')).copied()
        }
        Key::Letter(_) => None,
        Key::Function(n) => usize::from(n)
            .checked_sub(1)
            .and_then(|i| FUNCTION_KEYS.get(i))
            .copied(),
        Key::Backquote => Some(Code::Backquote),
        Key::Minus => Some(Code::Minus),
        Key::Equal => Some(Code::Equal),
        Key::BracketLeft => Some(Code::BracketLeft),
        Key::BracketRight => Some(Code::BracketRight),
        Key::Backslash => Some(Code::Backslash),
        Key::Semicolon => Some(Code::Semicolon),
        Key::Quote => Some(Code::Quote),
        Key::Comma => Some(Code::Comma),
        Key::Period => Some(Code::Period),
        Key::Slash => Some(Code::Slash),
    }
}

fn to_modifiers(modifiers: Modifiers) -> Option<HkModifiers> {
    let mut mapped = HkModifiers::empty();
    mapped.set(HkModifiers::CONTROL, modifiers.ctrl);
    mapped.set(HkModifiers::SHIFT, modifiers.shift);
    mapped.set(HkModifiers::ALT, modifiers.alt);
    mapped.set(HkModifiers::SUPER, modifiers.super_key);
    (!mapped.is_empty()).then_some(mapped)
}

/// Translates a combo into the `global-hotkey` representation.
pub fn to_hotkey(combo: &KeyCombo) -> Result<HotKey, HotkeyError> {
    let code = to_code(combo.key).ok_or(HotkeyError::Unsupported { combo: *combo })?;
    Ok(HotKey::new(to_modifiers(combo.modifiers), code))
}
