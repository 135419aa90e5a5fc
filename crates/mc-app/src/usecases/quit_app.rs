use std::sync::Arc;

use mc_core::notification::UiRequestSender;
use mc_core::{SlotStore, UiRequest};
use tracing::info;

use crate::lifecycle::ShutdownFlag;
use crate::persistence::PersistenceGateway;

/// Final save, then asks both threads to stop.
///
/// The hotkey loop notices the flag on its next tick and unregisters every
/// shortcut; the UI thread receives [`UiRequest::Shutdown`] and leaves its
/// event loop.
pub struct QuitApp {
    store: Arc<SlotStore>,
    gateway: Arc<PersistenceGateway>,
    ui_requests: UiRequestSender,
    shutdown: ShutdownFlag,
}

impl QuitApp {
    pub fn new(
        store: Arc<SlotStore>,
        gateway: Arc<PersistenceGateway>,
        ui_requests: UiRequestSender,
        shutdown: ShutdownFlag,
    ) -> Self {
        Self {
            store,
            gateway,
            ui_requests,
            shutdown,
        }
    }

    pub fn execute(&self) {
        info!("Quit requested, saving slots");
        self.gateway.save(&self.store);
        self.shutdown.request();
        self.ui_requests.push(UiRequest::Shutdown);
    }
}
