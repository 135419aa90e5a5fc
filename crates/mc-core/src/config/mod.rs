//! # Configuration Model / 配置模型
//!
//! Pure data: TOML sections mapped onto plain structs. Every section and field
//! has a default, so a missing file or a partial file still yields a complete
//! [`AppConfig`].
//!
//! ```toml
//! [storage]
//! slots_file = "/home/me/.local/share/multiclip/slots.bin"
//!
//! [clipboard]
//! copy_attempts = 3
//! copy_initial_delay_ms = 500
//! copy_retry_delay_ms = 500
//! paste_settle_delay_ms = 100
//!
//! [viewer]
//! poll_interval_ms = 100
//! preview_chars = 50
//! start_visible = false
//!
//! [hotkeys]
//! slot10_paste_key = "`"
//! idle_tick_ms = 50
//! ```

mod app_config;

pub use app_config::{AppConfig, ClipboardConfig, HotkeyConfig, StorageConfig, ViewerConfig};
