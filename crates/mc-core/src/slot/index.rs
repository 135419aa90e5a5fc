use std::fmt;

use thiserror::Error;

use super::SLOT_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotIndexError {
    #[error("slot position {position} is out of range (expected 0..{SLOT_COUNT})")]
    OutOfRange { position: usize },

    #[error("slot number {number} is out of range (expected 1..={SLOT_COUNT})")]
    NumberOutOfRange { number: usize },
}

/// Zero-based slot position, guaranteed to be in `0..SLOT_COUNT`.
///
/// Users see slots numbered from 1, so `Display` prints [`SlotIndex::number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub fn new(position: usize) -> Result<Self, SlotIndexError> {
        if position < SLOT_COUNT {
            Ok(Self(position as u8))
        } else {
            Err(SlotIndexError::OutOfRange { position })
        }
    }

    /// Builds an index from the 1-based number shown to users.
    pub fn from_number(number: usize) -> Result<Self, SlotIndexError> {
        match number {
            1..=SLOT_COUNT => Ok(Self((number - 1) as u8)),
            _ => Err(SlotIndexError::NumberOutOfRange { number }),
        }
    }

    pub const fn position(self) -> usize {
        self.0 as usize
    }

    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// Digit printed on the keyboard key for this slot: slot 10 lives on `0`.
    pub const fn digit(self) -> u8 {
        (self.number() % 10) as u8
    }

    /// All slots in order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT as u8).map(SlotIndex)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
