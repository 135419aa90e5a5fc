pub mod config;
pub mod hotkeys;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::ConfigOverrides;
pub use run::run;
