//! # Clipboard Bridge / 剪贴板桥接
//!
//! Moves text between the foreground application's selection and the slots.
//!
//! Copy sends the copy keystroke, then polls the system clipboard until the
//! focused application has published its selection. Paste writes the slot to
//! the system clipboard, then sends the paste keystroke.
//!
//! Neither direction ever raises: every failure ends up as a log line and a
//! non-success outcome, so a shortcut can never take the process down.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use mc_core::config::ClipboardConfig;
use mc_core::ports::{SelectionActionPort, SystemClipboardPort};
use mc_core::slot::preview::{preview_line, CONSOLE_PREVIEW_CHARS};
use mc_core::{NotificationEvent, NotificationSender, SlotIndex, SlotStore};
use tracing::{debug, error, info, warn};

use crate::persistence::PersistenceGateway;

/// Delays around the simulated keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeTiming {
    /// Clipboard reads after the copy keystroke, at least one.
    pub copy_attempts: u32,
    pub copy_initial_delay: Duration,
    pub copy_retry_delay: Duration,
    pub paste_settle_delay: Duration,
}

impl BridgeTiming {
    /// No waiting at all. Used where keystrokes are not real.
    pub const fn immediate(copy_attempts: u32) -> Self {
        Self {
            copy_attempts,
            copy_initial_delay: Duration::ZERO,
            copy_retry_delay: Duration::ZERO,
            paste_settle_delay: Duration::ZERO,
        }
    }
}

impl From<&ClipboardConfig> for BridgeTiming {
    fn from(config: &ClipboardConfig) -> Self {
        Self {
            copy_attempts: config.copy_attempts.max(1),
            copy_initial_delay: config.copy_initial_delay(),
            copy_retry_delay: config.copy_retry_delay(),
            paste_settle_delay: config.paste_settle_delay(),
        }
    }
}

impl Default for BridgeTiming {
    fn default() -> Self {
        Self::from(&ClipboardConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The slot now holds `chars` characters of fresh text.
    Copied { chars: usize },
    /// The clipboard stayed empty for every attempt; the slot is untouched.
    NothingCopied,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    Pasted,
    /// Nothing stored in the slot; no keystroke was sent.
    SlotEmpty,
    Failed,
}

pub struct ClipboardBridge {
    clipboard: Arc<dyn SystemClipboardPort>,
    selection: Arc<dyn SelectionActionPort>,
    store: Arc<SlotStore>,
    gateway: Arc<PersistenceGateway>,
    notifications: NotificationSender,
    timing: BridgeTiming,
}

impl ClipboardBridge {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        selection: Arc<dyn SelectionActionPort>,
        store: Arc<SlotStore>,
        gateway: Arc<PersistenceGateway>,
        notifications: NotificationSender,
        timing: BridgeTiming,
    ) -> Self {
        Self {
            clipboard,
            selection,
            store,
            gateway,
            notifications,
            timing,
        }
    }

    /// Captures the current selection into `index`.
    ///
    /// On success the slot is overwritten, an update is announced and the
    /// slots are saved. Otherwise the slot keeps its previous text.
    pub fn copy_into(&self, index: SlotIndex) -> CopyOutcome {
        info!(slot = %index, "Copying into slot {index}");
        match self.try_copy(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(slot = %index, error = ?err, "Copy into slot {index} failed");
                CopyOutcome::Failed
            }
        }
    }

    /// Types the text stored in `index` into the focused application.
    pub fn paste_from(&self, index: SlotIndex) -> PasteOutcome {
        info!(slot = %index, "Pasting from slot {index}");
        let Some(text) = self.store.get(index) else {
            info!(slot = %index, "Slot {index} is empty, nothing to paste");
            return PasteOutcome::SlotEmpty;
        };

        match self.try_paste(&text) {
            Ok(()) => {
                info!(
                    slot = %index,
                    "Pasted from slot {index}: {}",
                    preview_line(&text, CONSOLE_PREVIEW_CHARS)
                );
                PasteOutcome::Pasted
            }
            Err(err) => {
                error!(slot = %index, error = ?err, "Paste from slot {index} failed");
                PasteOutcome::Failed
            }
        }
    }

    fn try_copy(&self, index: SlotIndex) -> Result<CopyOutcome> {
        self.selection
            .trigger_copy()
            .context("failed to send copy keystroke")?;
        pause(self.timing.copy_initial_delay);

        let attempts = self.timing.copy_attempts.max(1);
        for attempt in 1..=attempts {
            match self.clipboard.read_text() {
                Ok(Some(text)) if !text.is_empty() => {
                    self.store_copied(index, text.clone());
                    info!(
                        slot = %index,
                        attempt,
                        "Copied into slot {index}: {}",
                        preview_line(&text, CONSOLE_PREVIEW_CHARS)
                    );
                    return Ok(CopyOutcome::Copied {
                        chars: text.chars().count(),
                    });
                }
                Ok(_) => debug!(slot = %index, attempt, "Clipboard still empty"),
                Err(err) => warn!(slot = %index, attempt, error = %err, "Clipboard read failed"),
            }
            if attempt < attempts {
                pause(self.timing.copy_retry_delay);
            }
        }

        warn!(
            slot = %index,
            attempts,
            "Nothing was copied into slot {index}: clipboard stayed empty"
        );
        Ok(CopyOutcome::NothingCopied)
    }

    fn store_copied(&self, index: SlotIndex, text: String) {
        self.store.set(index, text);
        self.notifications.push(NotificationEvent::Update);
        self.gateway.save(&self.store);
    }

    fn try_paste(&self, text: &str) -> Result<()> {
        self.clipboard
            .write_text(text)
            .context("failed to place slot text on the clipboard")?;
        pause(self.timing.paste_settle_delay);
        self.selection
            .trigger_paste()
            .context("failed to send paste keystroke")?;
        Ok(())
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
