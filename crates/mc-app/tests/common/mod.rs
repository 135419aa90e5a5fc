#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mc_app::{App, AppDeps, BridgeTiming, PersistenceGateway, ShutdownFlag};
use mc_core::notification::{notification_channel, ui_request_channel, UiRequestReceiver};
use mc_core::ports::{
    ClipboardError, HotkeyError, HotkeyHandler, HotkeyRegistrarPort, SelectionActionError,
    SelectionActionPort, SystemClipboardPort,
};
use mc_core::{KeyCombo, NotificationReceiver};
use mc_infra::FileSlotRepository;

/// In-memory system clipboard.
///
/// `copy_source` is what the "focused application" publishes when it
/// receives the copy keystroke.
#[derive(Default)]
pub struct FakeClipboard {
    pub content: Mutex<Option<String>>,
    pub copy_source: Mutex<Option<String>>,
}

impl FakeClipboard {
    pub fn current(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn select(&self, text: &str) {
        *self.copy_source.lock().unwrap() = Some(text.to_string());
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.current())
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.content.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Keystrokes that act on [`FakeClipboard`] the way a text editor would.
pub struct FakeSelection {
    pub clipboard: Arc<FakeClipboard>,
    pub copies: AtomicUsize,
    pub pastes: AtomicUsize,
    pub pasted: Mutex<Vec<String>>,
}

impl FakeSelection {
    pub fn new(clipboard: Arc<FakeClipboard>) -> Self {
        Self {
            clipboard,
            copies: AtomicUsize::new(0),
            pastes: AtomicUsize::new(0),
            pasted: Mutex::new(Vec::new()),
        }
    }
}

impl SelectionActionPort for FakeSelection {
    fn trigger_copy(&self) -> Result<(), SelectionActionError> {
        self.copies.fetch_add(1, Ordering::SeqCst);
        let selected = self.clipboard.copy_source.lock().unwrap().clone();
        if let Some(text) = selected {
            self.clipboard.write_text(&text).unwrap();
        }
        Ok(())
    }

    fn trigger_paste(&self) -> Result<(), SelectionActionError> {
        self.pastes.fetch_add(1, Ordering::SeqCst);
        if let Some(text) = self.clipboard.current() {
            self.pasted.lock().unwrap().push(text);
        }
        Ok(())
    }
}

/// Registrar that refuses a fixed set of combos and fires presses on demand.
#[derive(Default)]
pub struct FakeRegistrar {
    pub rejected: HashSet<KeyCombo>,
    pub handlers: HashMap<KeyCombo, HotkeyHandler>,
    pub attempts: Vec<KeyCombo>,
    pub pending: Vec<KeyCombo>,
    pub pumps: usize,
    pub unregistered: bool,
}

impl FakeRegistrar {
    pub fn rejecting(combos: impl IntoIterator<Item = KeyCombo>) -> Self {
        Self {
            rejected: combos.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn press(&mut self, combo: &str) {
        self.pending.push(combo.parse().unwrap());
    }
}

impl HotkeyRegistrarPort for FakeRegistrar {
    fn register(&mut self, combo: &KeyCombo, handler: HotkeyHandler) -> Result<(), HotkeyError> {
        self.attempts.push(*combo);
        if self.rejected.contains(combo) {
            return Err(HotkeyError::Rejected {
                combo: *combo,
                reason: "taken by another application".to_string(),
            });
        }
        if self.handlers.contains_key(combo) {
            return Err(HotkeyError::AlreadyRegistered { combo: *combo });
        }
        self.handlers.insert(*combo, handler);
        Ok(())
    }

    fn unregister_all(&mut self) {
        self.handlers.clear();
        self.unregistered = true;
    }

    fn pump(&mut self, _timeout: Duration) -> usize {
        self.pumps += 1;
        let mut ran = 0;
        for combo in std::mem::take(&mut self.pending) {
            if let Some(handler) = self.handlers.get(&combo) {
                handler();
                ran += 1;
            }
        }
        ran
    }
}

pub struct Harness {
    pub app: Arc<App>,
    pub clipboard: Arc<FakeClipboard>,
    pub selection: Arc<FakeSelection>,
    pub gateway: Arc<PersistenceGateway>,
    pub notifications: NotificationReceiver,
    pub ui_requests: UiRequestReceiver,
}

/// Wires an [`App`] over fakes and a real slot file at `slots_file`.
pub fn harness(slots_file: &Path) -> Harness {
    let clipboard = Arc::new(FakeClipboard::default());
    let selection = Arc::new(FakeSelection::new(clipboard.clone()));
    let gateway = Arc::new(PersistenceGateway::new(Arc::new(FileSlotRepository::new(
        slots_file,
    ))));
    let store = Arc::new(gateway.load());
    let (notifications_tx, notifications) = notification_channel();
    let (ui_tx, ui_requests) = ui_request_channel();

    let app = Arc::new(App::new(AppDeps {
        clipboard: clipboard.clone(),
        selection: selection.clone(),
        gateway: gateway.clone(),
        store,
        notifications: notifications_tx,
        ui_requests: ui_tx,
        timing: BridgeTiming::immediate(3),
        shutdown: ShutdownFlag::new(),
    }));

    Harness {
        app,
        clipboard,
        selection,
        gateway,
        notifications,
        ui_requests,
    }
}

impl FakeClipboard {
    /// Simulates another application replacing the clipboard.
    pub fn write_text_for_test(&self, text: &str) {
        *self.content.lock().unwrap() = Some(text.to_string());
    }
}
