use std::sync::Arc;

use mc_core::ports::SlotRepositoryPort;
use mc_core::SlotStore;
use tracing::{error, info};

/// Loads and saves the slot store without ever failing the caller.
///
/// A missing or unreadable file means an empty store; a failed save is
/// logged and skipped.
pub struct PersistenceGateway {
    repo: Arc<dyn SlotRepositoryPort>,
}

impl PersistenceGateway {
    pub fn new(repo: Arc<dyn SlotRepositoryPort>) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> SlotStore {
        let location = self.repo.location();
        match self.repo.load() {
            Ok(Some(contents)) => {
                let store = SlotStore::from_contents(contents);
                info!(
                    location = %location,
                    filled = store.filled_count(),
                    "Loaded slots from {location}"
                );
                store
            }
            Ok(None) => {
                info!(location = %location, "No saved slots found, starting with empty slots");
                SlotStore::new()
            }
            Err(err) => {
                error!(location = %location, error = %err, "Failed to load slots, starting with empty slots");
                SlotStore::new()
            }
        }
    }

    /// Writes every slot. Returns whether the data reached storage.
    pub fn save(&self, store: &SlotStore) -> bool {
        let location = self.repo.location();
        match self.repo.save(&store.snapshot()) {
            Ok(()) => {
                info!(location = %location, "Saved slots to {location}");
                true
            }
            Err(err) => {
                error!(location = %location, error = %err, "Failed to save slots");
                false
            }
        }
    }

    pub fn location(&self) -> String {
        self.repo.location()
    }
}
