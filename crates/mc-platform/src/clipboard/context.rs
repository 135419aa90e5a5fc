use std::time::Duration;

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;

/// Bound on how long an X11 read waits for the selection owner.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
const X11_READ_TIMEOUT: Duration = Duration::from_millis(500);

#[cfg(target_os = "linux")]
pub(super) fn new_context() -> Result<ClipboardContext> {
    use clipboard_rs::ClipboardContextX11Options;

    ClipboardContext::new_with_options(ClipboardContextX11Options {
        read_timeout: Some(X11_READ_TIMEOUT),
    })
    .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))
}

#[cfg(not(target_os = "linux"))]
pub(super) fn new_context() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| anyhow!("Failed to create clipboard context: {}", e))
}
