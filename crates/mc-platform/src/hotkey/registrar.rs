use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Result};
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use mc_core::ports::{HotkeyError, HotkeyHandler, HotkeyRegistrarPort};
use mc_core::KeyCombo;
use tracing::{debug, warn};

use super::keymap::to_hotkey;
use super::wait::{next_event, try_next_event};

struct Registration {
    combo: KeyCombo,
    hotkey: HotKey,
    handler: HotkeyHandler,
}

/// [`HotkeyRegistrarPort`] over a [`GlobalHotKeyManager`].
///
/// Handlers run on the thread that calls [`pump`](HotkeyRegistrarPort::pump).
pub struct GlobalHotkeyRegistrar {
    manager: GlobalHotKeyManager,
    registrations: HashMap<u32, Registration>,
}

impl GlobalHotkeyRegistrar {
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| anyhow!("Failed to create global hotkey manager: {}", e))?;
        Ok(Self {
            manager,
            registrations: HashMap::new(),
        })
    }

    fn dispatch(&self, event: GlobalHotKeyEvent) -> bool {
        if event.state != HotKeyState::Pressed {
            return false;
        }
        match self.registrations.get(&event.id) {
            Some(registration) => {
                debug!(combo = %registration.combo, "shortcut pressed");
                (registration.handler)();
                true
            }
            None => {
                debug!(id = event.id, "event for unknown shortcut ignored");
                false
            }
        }
    }
}

impl HotkeyRegistrarPort for GlobalHotkeyRegistrar {
    fn register(&mut self, combo: &KeyCombo, handler: HotkeyHandler) -> Result<(), HotkeyError> {
        let hotkey = to_hotkey(combo)?;
        if self.registrations.contains_key(&hotkey.id()) {
            return Err(HotkeyError::AlreadyRegistered { combo: *combo });
        }

        self.manager.register(hotkey).map_err(|e| match e {
            global_hotkey::Error::AlreadyRegistered(_) => {
                HotkeyError::AlreadyRegistered { combo: *combo }
            }
            other => HotkeyError::Rejected {
                combo: *combo,
                reason: other.to_string(),
            },
        })?;

        self.registrations.insert(
            hotkey.id(),
            Registration {
                combo: *combo,
                hotkey,
                handler,
            },
        );
        Ok(())
    }

    fn unregister_all(&mut self) {
        for (_, registration) in self.registrations.drain() {
            if let Err(e) = self.manager.unregister(registration.hotkey) {
                warn!(combo = %registration.combo, error = %e, "Failed to unregister shortcut");
            }
        }
    }

    fn pump(&mut self, timeout: Duration) -> usize {
        let Some(first) = next_event(timeout) else {
            return 0;
        };

        let mut ran = usize::from(self.dispatch(first));
        while let Some(event) = try_next_event() {
            ran += usize::from(self.dispatch(event));
        }
        ran
    }
}

impl Drop for GlobalHotkeyRegistrar {
    fn drop(&mut self) {
        if !self.registrations.is_empty() {
            self.unregister_all();
        }
    }
}
