//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create platform adapters (clipboard, keystrokes) / 创建 platform 层实现
//! - Create the slot file repository and load the store / 创建存储并加载槽位
//! - Create the channels and inject everything into [`App`] / 注入 App
//!
//! No business logic here: this is the only place that depends on
//! `mc-infra`, `mc-platform` and `mc-app` at once, for assembly only.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use mc_app::{App, AppDeps, BridgeTiming, PersistenceGateway, ShutdownFlag};
use mc_core::hotkey::default_bindings;
use mc_core::notification::{notification_channel, ui_request_channel, UiRequestReceiver};
use mc_core::ports::{SelectionActionPort, SlotRepositoryPort, SystemClipboardPort};
use mc_core::{AppConfig, HotkeyBinding, NotificationReceiver};
use mc_infra::FileSlotRepository;
use mc_platform::{EnigoSelectionActions, LocalClipboard};
use tracing::info;

/// Everything the two runtime threads need.
pub struct WiredApp {
    pub app: Arc<App>,
    pub bindings: Vec<HotkeyBinding>,
    pub notifications: NotificationReceiver,
    pub ui_requests: UiRequestReceiver,
}

/// Builds the [`App`] over the real OS adapters.
pub fn wire_dependencies(config: &AppConfig, slots_file: &Path) -> anyhow::Result<WiredApp> {
    let clipboard: Arc<dyn SystemClipboardPort> =
        Arc::new(LocalClipboard::new().context("Failed to open the system clipboard")?);
    let selection: Arc<dyn SelectionActionPort> = Arc::new(EnigoSelectionActions::new());
    let repo: Arc<dyn SlotRepositoryPort> = Arc::new(FileSlotRepository::new(slots_file));

    let slot10_key = config
        .hotkeys
        .slot10_key()
        .with_context(|| {
            format!(
                "Invalid hotkeys.slot10_paste_key `{}`",
                config.hotkeys.slot10_paste_key
            )
        })?;

    Ok(assemble(config, clipboard, selection, repo, default_bindings(slot10_key)))
}

/// Pure assembly over already-built ports.
pub fn assemble(
    config: &AppConfig,
    clipboard: Arc<dyn SystemClipboardPort>,
    selection: Arc<dyn SelectionActionPort>,
    repo: Arc<dyn SlotRepositoryPort>,
    bindings: Vec<HotkeyBinding>,
) -> WiredApp {
    let gateway = Arc::new(PersistenceGateway::new(repo));
    let store = Arc::new(gateway.load());
    info!(
        location = %gateway.location(),
        filled = store.filled_count(),
        "Slot storage ready"
    );

    let (notifications_tx, notifications) = notification_channel();
    let (ui_requests_tx, ui_requests) = ui_request_channel();

    let app = Arc::new(App::new(AppDeps {
        clipboard,
        selection,
        gateway,
        store,
        notifications: notifications_tx,
        ui_requests: ui_requests_tx,
        timing: BridgeTiming::from(&config.clipboard),
        shutdown: ShutdownFlag::new(),
    }));

    WiredApp {
        app,
        bindings,
        notifications,
        ui_requests,
    }
}
