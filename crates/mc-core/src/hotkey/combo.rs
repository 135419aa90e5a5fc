use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyComboParseError {
    #[error("key combination is empty")]
    Empty,

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),

    #[error("unknown key `{0}`")]
    UnknownKey(String),

    #[error("`{0}` has no modifier; global shortcuts need at least one")]
    MissingModifier(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
        super_key: false,
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::CTRL
    };
    pub const CTRL_ALT: Modifiers = Modifiers {
        alt: true,
        ..Modifiers::CTRL
    };

    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.shift || self.alt || self.super_key)
    }
}

/// Physical key of a combination, named by its unshifted US-layout label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(u8),
    /// Always stored uppercase.
    Letter(char),
    Function(u8),
    Backquote,
    Minus,
    Equal,
    BracketLeft,
    BracketRight,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
}

impl Key {
    const PUNCTUATION: [(Key, &'static str, &'static str); 11] = [
        (Key::Backquote, "`", "backquote"),
        (Key::Minus, "-", "minus"),
        (Key::Equal, "=", "equal"),
        (Key::BracketLeft, "[", "bracketleft"),
        (Key::BracketRight, "]", "bracketright"),
        (Key::Backslash, "\\", "backslash"),
        (Key::Semicolon, ";", "semicolon"),
        (Key::Quote, "'", "quote"),
        (Key::Comma, ",", "comma"),
        (Key::Period, ".", "period"),
        (Key::Slash, "/", "slash"),
    ];
}

impl FromStr for Key {
    type Err = KeyComboParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(KeyComboParseError::Empty),
            (Some(c), None) if c.is_ascii_digit() => return Ok(Key::Digit(c as u8 - b'0')),
            (Some(c), None) if c.is_ascii_alphabetic() => {
                return Ok(Key::Letter(c.to_ascii_uppercase()))
            }
            _ => {}
        }

        if let Some(n) = token.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&n) {
                return Ok(Key::Function(n));
            }
        }

        if token == "grave" {
            return Ok(Key::Backquote);
        }

        Key::PUNCTUATION
            .iter()
            .find(|(_, symbol, name)| token == *symbol || token == *name)
            .map(|(key, _, _)| *key)
            .ok_or_else(|| KeyComboParseError::UnknownKey(s.trim().to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{d}"),
            Key::Letter(c) => write!(f, "{}", c.to_ascii_lowercase()),
            Key::Function(n) => write!(f, "f{n}"),
            other => {
                let symbol = Key::PUNCTUATION
                    .iter()
                    .find(|(key, _, _)| key == other)
                    .map(|(_, symbol, _)| *symbol)
                    .unwrap_or("?");
                f.write_str(symbol)
            }
        }
    }
}

/// A global shortcut such as `ctrl+shift+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl KeyCombo {
    pub const fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }
}

impl FromStr for KeyCombo {
    type Err = KeyComboParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(KeyComboParseError::Empty);
        }

        let mut parts: Vec<&str> = trimmed.split('+').map(str::trim).collect();
        let key: Key = parts.pop().unwrap_or_default().parse()?;

        let mut modifiers = Modifiers::default();
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" | "option" => modifiers.alt = true,
                "super" | "cmd" | "command" | "meta" | "win" => modifiers.super_key = true,
                other => return Err(KeyComboParseError::UnknownModifier(other.to_string())),
            }
        }

        if modifiers.is_empty() {
            return Err(KeyComboParseError::MissingModifier(trimmed.to_string()));
        }

        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Modifiers {
            ctrl,
            shift,
            alt,
            super_key,
        } = self.modifiers;
        for (held, name) in [
            (ctrl, "ctrl"),
            (shift, "shift"),
            (alt, "alt"),
            (super_key, "super"),
        ] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
