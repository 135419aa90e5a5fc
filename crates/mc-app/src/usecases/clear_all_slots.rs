use std::sync::Arc;

use mc_core::{NotificationEvent, NotificationSender, SlotStore};
use tracing::info;

use crate::persistence::PersistenceGateway;

/// Empties every slot, announces it and persists the empty state.
pub struct ClearAllSlots {
    store: Arc<SlotStore>,
    gateway: Arc<PersistenceGateway>,
    notifications: NotificationSender,
}

impl ClearAllSlots {
    pub fn new(
        store: Arc<SlotStore>,
        gateway: Arc<PersistenceGateway>,
        notifications: NotificationSender,
    ) -> Self {
        Self {
            store,
            gateway,
            notifications,
        }
    }

    /// Returns whether the cleared state was saved.
    pub fn execute(&self) -> bool {
        self.store.clear_all();
        info!("All slots cleared");
        self.notifications.push(NotificationEvent::Clear);
        self.gateway.save(&self.store)
    }
}
