use std::sync::Arc;

use mc_core::SlotStore;
use tracing::info;

use crate::persistence::PersistenceGateway;

/// Explicit save requested by the user.
pub struct SaveSlots {
    store: Arc<SlotStore>,
    gateway: Arc<PersistenceGateway>,
}

impl SaveSlots {
    pub fn new(store: Arc<SlotStore>, gateway: Arc<PersistenceGateway>) -> Self {
        Self { store, gateway }
    }

    pub fn execute(&self) -> bool {
        info!(filled = self.store.filled_count(), "Saving slots on request");
        self.gateway.save(&self.store)
    }
}
