//! # Hotkey Dispatcher / 快捷键分发
//!
//! Binds every [`HotkeyBinding`] to the [`App`] through a
//! [`HotkeyRegistrarPort`], then pumps the registrar until shutdown.
//!
//! Registration is best-effort: a combination the OS refuses is logged and
//! skipped while the rest stay active. Every handler runs inside
//! `catch_unwind`, so a panicking use case cannot kill the hotkey thread.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use mc_core::ports::{HotkeyError, HotkeyHandler, HotkeyRegistrarPort};
use mc_core::{HotkeyAction, HotkeyBinding};
use tracing::{error, info, warn};

use crate::app::App;

#[derive(Debug)]
pub struct RegistrationFailure {
    pub binding: HotkeyBinding,
    pub error: HotkeyError,
}

#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub registered: Vec<HotkeyBinding>,
    pub failures: Vec<RegistrationFailure>,
}

impl RegistrationReport {
    pub fn all_registered(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct HotkeyDispatcher {
    app: Arc<App>,
    bindings: Vec<HotkeyBinding>,
}

impl HotkeyDispatcher {
    pub fn new(app: Arc<App>, bindings: Vec<HotkeyBinding>) -> Self {
        Self { app, bindings }
    }

    pub fn bindings(&self) -> &[HotkeyBinding] {
        &self.bindings
    }

    pub fn register_all(&self, registrar: &mut dyn HotkeyRegistrarPort) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        for binding in &self.bindings {
            match registrar.register(&binding.combo, self.handler_for(binding.action)) {
                Ok(()) => {
                    info!(
                        combo = %binding.combo,
                        action = %binding.action,
                        "Registered shortcut {} for {}",
                        binding.combo,
                        binding.action
                    );
                    report.registered.push(*binding);
                }
                Err(error) => {
                    error!(
                        combo = %binding.combo,
                        action = %binding.action,
                        error = %error,
                        "Failed to register shortcut {}",
                        binding.combo
                    );
                    report.failures.push(RegistrationFailure {
                        binding: *binding,
                        error,
                    });
                }
            }
        }

        if !report.all_registered() {
            warn!(
                registered = report.registered.len(),
                failed = report.failures.len(),
                "Some shortcuts are unavailable"
            );
        }
        report
    }

    /// Pumps `registrar` until the quit path raises the shutdown flag, then
    /// releases every shortcut.
    pub fn run_until_shutdown(&self, registrar: &mut dyn HotkeyRegistrarPort, idle_tick: Duration) {
        let shutdown = self.app.shutdown_flag();
        while !shutdown.is_requested() {
            registrar.pump(idle_tick);
        }
        registrar.unregister_all();
        info!("Shortcuts unregistered, hotkey loop stopped");
    }

    fn handler_for(&self, action: HotkeyAction) -> HotkeyHandler {
        let app = Arc::clone(&self.app);
        Box::new(move || run_guarded(action, || app.execute(action)))
    }
}

/// Runs `f`, logging instead of propagating a panic.
pub fn run_guarded(action: HotkeyAction, f: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        error!(
            action = %action,
            panic = %panic_message(payload.as_ref()),
            "Shortcut handler for {action} panicked"
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Startup help text: one line per shortcut group.
pub fn usage_lines(bindings: &[HotkeyBinding]) -> Vec<String> {
    let mut lines = Vec::new();

    let copies: Vec<_> = bindings
        .iter()
        .filter(|b| matches!(b.action, HotkeyAction::CopyToSlot(_)))
        .collect();
    let pastes: Vec<_> = bindings
        .iter()
        .filter(|b| matches!(b.action, HotkeyAction::PasteFromSlot(_)))
        .collect();

    if let Some(line) = range_line(&copies, "copy into") {
        lines.push(line);
    }
    if let Some(line) = range_line(&pastes, "paste from") {
        lines.push(line);
    }
    lines.extend(
        bindings
            .iter()
            .filter(|b| {
                !matches!(
                    b.action,
                    HotkeyAction::CopyToSlot(_) | HotkeyAction::PasteFromSlot(_)
                )
            })
            .map(|b| format!("{}: {}", b.combo, b.action)),
    );
    lines
}

fn range_line(group: &[&HotkeyBinding], verb: &str) -> Option<String> {
    let (first, last) = (group.first()?, group.last()?);
    let slot_of = |binding: &HotkeyBinding| match binding.action {
        HotkeyAction::CopyToSlot(index) | HotkeyAction::PasteFromSlot(index) => index.number(),
        _ => 0,
    };
    if group.len() == 1 {
        return Some(format!("{}: {}", first.combo, first.action));
    }
    Some(format!(
        "{} .. {}: {verb} slots {}-{}",
        first.combo,
        last.combo,
        slot_of(first),
        slot_of(last)
    ))
}

#[cfg(test)]
mod tests {
    use mc_core::hotkey::default_bindings;
    use mc_core::Key;

    use super::*;

    #[test]
    fn usage_groups_slot_shortcuts() {
        let lines = usage_lines(&default_bindings(Key::Backquote));

        assert_eq!(
            lines,
            vec![
                "ctrl+1 .. ctrl+0: copy into slots 1-10".to_string(),
                "ctrl+shift+1 .. ctrl+shift+`: paste from slots 1-10".to_string(),
                "ctrl+alt+b: show all slots".to_string(),
                "ctrl+alt+c: clear all slots".to_string(),
                "ctrl+alt+s: save slots".to_string(),
                "ctrl+alt+q: quit".to_string(),
            ]
        );
    }

    #[test]
    fn guarded_handler_swallows_panics() {
        run_guarded(HotkeyAction::Save, || panic!("boom"));
    }

    #[test]
    fn panic_message_reads_common_payloads() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_message(other.as_ref()), "unknown panic payload");
    }
}
