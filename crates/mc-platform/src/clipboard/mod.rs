//! System clipboard, text only.
//!
//! One [`ClipboardContext`] lives for the whole process. On X11 the owner of
//! the selection must stay alive for other applications to read what we
//! wrote, so the context is never recreated per call.

mod context;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use mc_core::ports::{ClipboardError, SystemClipboardPort};
use tracing::trace;

pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = context::new_context()?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, ClipboardContext> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let ctx = self.lock();
        if !ctx.has(ContentFormat::Text) {
            trace!("clipboard holds no text");
            return Ok(None);
        }
        let text = ctx
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))?;
        Ok((!text.is_empty()).then_some(text))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.lock();
        ctx.set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
