//! multiclip application layer
//!
//! Use cases behind every shortcut and viewer action, plus the dispatcher
//! that binds them to global key combinations.

pub mod app;
pub mod app_paths;
pub mod bridge;
pub mod deps;
pub mod dispatcher;
pub mod lifecycle;
pub mod persistence;
pub mod usecases;

pub use app::App;
pub use app_paths::AppPaths;
pub use bridge::{BridgeTiming, ClipboardBridge, CopyOutcome, PasteOutcome};
pub use deps::AppDeps;
pub use dispatcher::{HotkeyDispatcher, RegistrationFailure, RegistrationReport};
pub use lifecycle::ShutdownFlag;
pub use persistence::PersistenceGateway;
