use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{empty_contents, SlotContents, SlotIndex};

/// The ten slots, shared between the hotkey thread and the viewer.
///
/// Every operation takes the lock for a single read or write, so a reader
/// observes either the old or the new value of a slot, and `clear_all`
/// empties all slots in one step.
#[derive(Debug)]
pub struct SlotStore {
    slots: RwLock<SlotContents>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::from_contents(empty_contents())
    }

    pub fn from_contents(contents: SlotContents) -> Self {
        Self {
            slots: RwLock::new(contents),
        }
    }

    /// Returns the slot text, or `None` when the slot is empty.
    pub fn get(&self, index: SlotIndex) -> Option<String> {
        let slots = self.read();
        let text = &slots[index.position()];
        (!text.is_empty()).then(|| text.clone())
    }

    /// Stores `text` in the slot. An empty string empties the slot.
    pub fn set(&self, index: SlotIndex, text: impl Into<String>) {
        self.write()[index.position()] = text.into();
    }

    pub fn clear_all(&self) {
        *self.write() = empty_contents();
    }

    /// Consistent copy of all slots.
    pub fn snapshot(&self) -> SlotContents {
        self.read().clone()
    }

    pub fn filled_count(&self) -> usize {
        self.read().iter().filter(|text| !text.is_empty()).count()
    }

    // Slots are plain strings, so a writer that panicked cannot leave them
    // half-updated; recover the guard instead of propagating the poison.
    fn read(&self) -> RwLockReadGuard<'_, SlotContents> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SlotContents> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::slot::SLOT_COUNT;

    fn slot(position: usize) -> SlotIndex {
        SlotIndex::new(position).unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let store = SlotStore::new();
        assert!(SlotIndex::all().all(|index| store.get(index).is_none()));
        assert_eq!(store.filled_count(), 0);
    }

    #[test]
    fn set_then_get_returns_text() {
        let store = SlotStore::new();
        store.set(slot(2), "hello world");
        assert_eq!(store.get(slot(2)).as_deref(), Some("hello world"));
        assert_eq!(store.get(slot(3)), None);
    }

    #[test]
    fn setting_empty_string_empties_slot() {
        let store = SlotStore::new();
        store.set(slot(0), "x");
        store.set(slot(0), "");
        assert_eq!(store.get(slot(0)), None);
    }

    #[test]
    fn clear_all_empties_every_slot() {
        let store = SlotStore::new();
        for index in SlotIndex::all() {
            store.set(index, format!("value {index}"));
        }
        assert_eq!(store.filled_count(), SLOT_COUNT);

        store.clear_all();

        assert_eq!(store.snapshot(), empty_contents());
    }

    #[test]
    fn snapshot_preserves_slot_order() {
        let store = SlotStore::new();
        store.set(slot(9), "last");
        store.set(slot(0), "first");

        let snapshot = store.snapshot();
        assert_eq!(snapshot[0], "first");
        assert_eq!(snapshot[9], "last");
        assert!(snapshot[1..9].iter().all(String::is_empty));
    }

    #[test]
    fn concurrent_writers_never_tear_values() {
        let store = Arc::new(SlotStore::new());
        let writers: Vec<_> = (0..4)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..200 {
                        store.set(slot(5), format!("writer-{n}-payload"));
                    }
                })
            })
            .collect();

        for _ in 0..200 {
            if let Some(text) = store.get(slot(5)) {
                assert!(text.starts_with("writer-") && text.ends_with("-payload"));
            }
        }
        for writer in writers {
            writer.join().unwrap();
        }
    }
}
