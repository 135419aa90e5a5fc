//! Slot domain: the ten numbered clipboard locations.

mod index;
pub mod preview;
mod store;

pub use index::{SlotIndex, SlotIndexError};
pub use store::SlotStore;

/// Number of slots. Fixed for the lifetime of the process and of the slot file.
pub const SLOT_COUNT: usize = 10;

/// Raw slot contents in slot order. An empty string is an empty slot.
pub type SlotContents = [String; SLOT_COUNT];

/// Returns ten empty slots.
pub fn empty_contents() -> SlotContents {
    std::array::from_fn(|_| String::new())
}
