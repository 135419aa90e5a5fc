//! # mc-tui
//!
//! Terminal front end of multiclip: process bootstrap (config, tracing,
//! wiring, threads) and the slot viewer.

pub mod bootstrap;
pub mod viewer;
