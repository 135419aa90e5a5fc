mod file_repo;

pub use file_repo::{FileSlotRepository, MAX_SLOT_FILE_BYTES};
