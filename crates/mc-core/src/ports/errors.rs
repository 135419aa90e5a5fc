use std::path::PathBuf;

use thiserror::Error;

use crate::hotkey::KeyCombo;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory unavailable")]
    DataLocalDirUnavailable,

    #[error("system config directory unavailable")]
    ConfigDirUnavailable,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard read failed: {0}")]
    Read(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum SelectionActionError {
    #[error("input simulation backend unavailable: {0}")]
    Backend(String),

    #[error("failed to send keystroke: {0}")]
    Input(String),
}

#[derive(Debug, Error)]
pub enum SlotRepositoryError {
    #[error("slot file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("slot file is corrupt: {0}")]
    Corrupt(String),

    #[error("failed to encode slots: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("{combo} cannot be expressed on this platform")]
    Unsupported { combo: KeyCombo },

    #[error("{combo} is already registered")]
    AlreadyRegistered { combo: KeyCombo },

    #[error("registering {combo} failed: {reason}")]
    Rejected { combo: KeyCombo, reason: String },
}
