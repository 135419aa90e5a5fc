//! Slot viewer: a table of all ten slots in the terminal's alternate screen.

pub mod render;
pub mod runner;
pub mod state;
pub mod terminal;

pub use runner::ViewerLoop;
pub use state::{ViewerCommand, ViewerState, Visibility};
pub use terminal::{setup_panic_handler, ViewerTerminal};
