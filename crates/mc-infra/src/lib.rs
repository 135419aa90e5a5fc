pub mod config;
pub mod slots;

pub use config::load_config;
pub use slots::FileSlotRepository;
