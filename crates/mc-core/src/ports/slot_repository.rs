use crate::ports::errors::SlotRepositoryError;
use crate::slot::SlotContents;

/// Durable storage for the ten slots.
pub trait SlotRepositoryPort: Send + Sync {
    /// Reads the stored slots. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<SlotContents>, SlotRepositoryError>;

    /// Overwrites the stored slots. Must be idempotent.
    fn save(&self, contents: &SlotContents) -> Result<(), SlotRepositoryError>;

    /// Human-readable location for log lines.
    fn location(&self) -> String;
}
