use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hotkey::{Key, KeyComboParseError};
use crate::slot::preview::TABLE_PREVIEW_CHARS;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub clipboard: ClipboardConfig,
    pub viewer: ViewerConfig,
    pub hotkeys: HotkeyConfig,
}

/// Where the slots are persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// `None` means the platform data directory.
    pub slots_file: Option<PathBuf>,
}

/// Timing of simulated copy/paste keystrokes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How many times the clipboard is read after a copy keystroke.
    pub copy_attempts: u32,
    pub copy_initial_delay_ms: u64,
    pub copy_retry_delay_ms: u64,
    /// Pause between writing the clipboard and sending the paste keystroke.
    pub paste_settle_delay_ms: u64,
}

impl ClipboardConfig {
    pub fn copy_initial_delay(&self) -> Duration {
        Duration::from_millis(self.copy_initial_delay_ms)
    }

    pub fn copy_retry_delay(&self) -> Duration {
        Duration::from_millis(self.copy_retry_delay_ms)
    }

    pub fn paste_settle_delay(&self) -> Duration {
        Duration::from_millis(self.paste_settle_delay_ms)
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            copy_attempts: 3,
            copy_initial_delay_ms: 500,
            copy_retry_delay_ms: 500,
            paste_settle_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub poll_interval_ms: u64,
    pub preview_chars: usize,
    pub start_visible: bool,
}

impl ViewerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            preview_chars: TABLE_PREVIEW_CHARS,
            start_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Key pressed with ctrl+shift to paste from slot 10.
    pub slot10_paste_key: String,
    /// Upper bound on how long the hotkey thread sleeps between key-press checks.
    pub idle_tick_ms: u64,
}

impl HotkeyConfig {
    pub fn slot10_key(&self) -> Result<Key, KeyComboParseError> {
        self.slot10_paste_key.parse()
    }

    pub fn idle_tick(&self) -> Duration {
        Duration::from_millis(self.idle_tick_ms.max(1))
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            slot10_paste_key: "`".to_string(),
            idle_tick_ms: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.clipboard.copy_attempts, 3);
        assert_eq!(config.viewer.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.hotkeys.slot10_key().unwrap(), Key::Backquote);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [clipboard]
            copy_attempts = 5

            [hotkeys]
            slot10_paste_key = "-"
            "#,
        )
        .unwrap();

        assert_eq!(config.clipboard.copy_attempts, 5);
        assert_eq!(config.clipboard.copy_retry_delay_ms, 500);
        assert_eq!(config.hotkeys.slot10_key().unwrap(), Key::Minus);
        assert_eq!(config.hotkeys.idle_tick_ms, 50);
        assert_eq!(config.storage.slots_file, None);
    }

    #[test]
    fn zero_intervals_are_clamped() {
        let viewer = ViewerConfig {
            poll_interval_ms: 0,
            ..ViewerConfig::default()
        };
        assert_eq!(viewer.poll_interval(), Duration::from_millis(1));
    }
}
