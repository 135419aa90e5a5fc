use std::fs;
use std::io;
use std::path::PathBuf;

use bincode::Options;
use mc_core::ports::{SlotRepositoryError, SlotRepositoryPort};
use mc_core::{SlotContents, SLOT_COUNT};
use tracing::debug;

/// Upper bound on what a slot file may decode to.
pub const MAX_SLOT_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// Slots stored as one bincode sequence of exactly [`SLOT_COUNT`] strings.
///
/// There is no header or version; anything that does not decode to that
/// exact shape is reported as corrupt.
pub struct FileSlotRepository {
    path: PathBuf,
}

impl FileSlotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> SlotRepositoryError {
        SlotRepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .with_limit(MAX_SLOT_FILE_BYTES)
}

fn decode(bytes: &[u8]) -> Result<SlotContents, SlotRepositoryError> {
    let slots: Vec<String> = codec()
        .deserialize(bytes)
        .map_err(|err| SlotRepositoryError::Corrupt(err.to_string()))?;
    SlotContents::try_from(slots).map_err(|slots| {
        SlotRepositoryError::Corrupt(format!(
            "expected {SLOT_COUNT} slots, found {}",
            slots.len()
        ))
    })
}

fn encode(contents: &SlotContents) -> Result<Vec<u8>, SlotRepositoryError> {
    codec()
        .serialize(&contents[..])
        .map_err(|err| SlotRepositoryError::Encode(err.to_string()))
}

impl SlotRepositoryPort for FileSlotRepository {
    fn load(&self) -> Result<Option<SlotContents>, SlotRepositoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        debug!(path = %self.path.display(), bytes = bytes.len(), "read slot file");
        decode(&bytes).map(Some)
    }

    fn save(&self, contents: &SlotContents) -> Result<(), SlotRepositoryError> {
        let bytes = encode(contents)?;
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, &bytes).map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "wrote slot file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
