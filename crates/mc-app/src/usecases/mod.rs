//! Use cases triggered by shortcuts and viewer keys.

pub mod clear_all_slots;
pub mod quit_app;
pub mod save_slots;
pub mod show_slots;

pub use clear_all_slots::ClearAllSlots;
pub use quit_app::QuitApp;
pub use save_slots::SaveSlots;
pub use show_slots::ShowSlots;
