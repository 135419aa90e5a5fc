//! Background hotkey thread.
//!
//! The registrar is created, pumped and dropped on this thread only.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Context;
use mc_app::dispatcher::usage_lines;
use mc_app::{App, HotkeyDispatcher};
use mc_core::HotkeyBinding;
use mc_platform::GlobalHotkeyRegistrar;
use tracing::{error, info};

pub fn spawn_hotkey_thread(
    app: Arc<App>,
    bindings: Vec<HotkeyBinding>,
    idle_tick: Duration,
) -> anyhow::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("multiclip-hotkeys".to_string())
        .spawn(move || run_hotkey_loop(app, bindings, idle_tick))
        .context("Failed to spawn hotkey thread")
}

fn run_hotkey_loop(app: Arc<App>, bindings: Vec<HotkeyBinding>, idle_tick: Duration) {
    let mut registrar = match GlobalHotkeyRegistrar::new() {
        Ok(registrar) => registrar,
        Err(err) => {
            error!(error = %err, "Global shortcuts unavailable; only the viewer keys will work");
            return;
        }
    };

    let dispatcher = HotkeyDispatcher::new(app, bindings);
    let report = dispatcher.register_all(&mut registrar);

    info!("=== multiclip started ===");
    for line in usage_lines(dispatcher.bindings()) {
        info!("  {line}");
    }
    for failure in &report.failures {
        info!("  {} unavailable: {}", failure.binding.combo, failure.error);
    }

    dispatcher.run_until_shutdown(&mut registrar, idle_tick);
}
