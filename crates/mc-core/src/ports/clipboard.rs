use crate::ports::errors::ClipboardError;

/// System clipboard, text only.
pub trait SystemClipboardPort: Send + Sync {
    /// Current clipboard text, or `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>, ClipboardError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
