//! # Application / 应用
//!
//! [`App`] owns every use case and routes a [`HotkeyAction`] to the right
//! one. It is shared between the hotkey thread and the viewer.

use std::sync::Arc;

use mc_core::{HotkeyAction, SlotIndex, SlotStore};

use crate::bridge::{ClipboardBridge, CopyOutcome, PasteOutcome};
use crate::deps::AppDeps;
use crate::lifecycle::ShutdownFlag;
use crate::persistence::PersistenceGateway;
use crate::usecases::{ClearAllSlots, QuitApp, SaveSlots, ShowSlots};

pub struct App {
    store: Arc<SlotStore>,
    gateway: Arc<PersistenceGateway>,
    bridge: ClipboardBridge,
    clear_all: ClearAllSlots,
    save: SaveSlots,
    show: ShowSlots,
    quit: QuitApp,
    shutdown: ShutdownFlag,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let AppDeps {
            clipboard,
            selection,
            gateway,
            store,
            notifications,
            ui_requests,
            timing,
            shutdown,
        } = deps;

        let bridge = ClipboardBridge::new(
            clipboard,
            selection,
            store.clone(),
            gateway.clone(),
            notifications.clone(),
            timing,
        );

        Self {
            clear_all: ClearAllSlots::new(store.clone(), gateway.clone(), notifications),
            save: SaveSlots::new(store.clone(), gateway.clone()),
            show: ShowSlots::new(store.clone(), ui_requests.clone()),
            quit: QuitApp::new(store.clone(), gateway.clone(), ui_requests, shutdown.clone()),
            bridge,
            store,
            gateway,
            shutdown,
        }
    }

    /// Runs the use case bound to `action` on the calling thread.
    pub fn execute(&self, action: HotkeyAction) {
        match action {
            HotkeyAction::CopyToSlot(index) => {
                self.copy_into(index);
            }
            HotkeyAction::PasteFromSlot(index) => {
                self.paste_from(index);
            }
            HotkeyAction::ShowViewer => self.show.execute(),
            HotkeyAction::ClearAll => {
                self.clear_all();
            }
            HotkeyAction::Save => {
                self.save();
            }
            HotkeyAction::Quit => self.quit(),
        }
    }

    pub fn copy_into(&self, index: SlotIndex) -> CopyOutcome {
        self.bridge.copy_into(index)
    }

    pub fn paste_from(&self, index: SlotIndex) -> PasteOutcome {
        self.bridge.paste_from(index)
    }

    pub fn clear_all(&self) -> bool {
        self.clear_all.execute()
    }

    pub fn save(&self) -> bool {
        self.save.execute()
    }

    pub fn quit(&self) {
        self.quit.execute()
    }

    pub fn store(&self) -> &Arc<SlotStore> {
        &self.store
    }

    pub fn storage_location(&self) -> String {
        self.gateway.location()
    }

    pub fn shutdown_flag(&self) -> &ShutdownFlag {
        &self.shutdown
    }
}
