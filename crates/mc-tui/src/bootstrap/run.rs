//! # Process Entry / 进程入口
//!
//! Startup order:
//!
//! 1. Resolve directories and install tracing / 目录与日志
//! 2. Load configuration / 加载配置
//! 3. Wire the app and load the slot file / 组装依赖
//! 4. Start the hotkey thread / 启动快捷键线程
//! 5. Run the viewer loop on this thread until quit / 运行查看器循环

use anyhow::Context;
use mc_app::AppPaths;
use mc_core::ports::AppDirsPort;
use mc_platform::DirsAppDirsAdapter;
use tracing::{error, info, warn};

use crate::viewer::{setup_panic_handler, ViewerLoop};

use super::config::{load_app_config, slots_file, ConfigOverrides};
use super::hotkeys::spawn_hotkey_thread;
use super::tracing::{init_tracing_subscriber, ConsoleGate};
use super::wiring::{wire_dependencies, WiredApp};

pub fn run(overrides: ConfigOverrides) -> anyhow::Result<()> {
    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let paths = AppPaths::from_app_dirs(&dirs);

    let gate = ConsoleGate::new();
    init_tracing_subscriber(Some(&paths.logs_dir), gate.clone())?;
    setup_panic_handler(gate.clone());

    let (config, config_path) = load_app_config(&overrides, &paths)
        .inspect_err(|err| error!(error = ?err, "Failed to load configuration"))?;
    info!(config = %config_path.display(), "Configuration loaded");

    let slots_file = slots_file(&config, &paths);
    let WiredApp {
        app,
        bindings,
        notifications,
        ui_requests,
    } = wire_dependencies(&config, &slots_file)?;

    let hotkey_thread = spawn_hotkey_thread(app.clone(), bindings, config.hotkeys.idle_tick())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let viewer = ViewerLoop::new(
        app.clone(),
        notifications,
        ui_requests,
        gate,
        config.viewer.poll_interval(),
        config.viewer.preview_chars,
    );
    let result = runtime.block_on(viewer.run(config.viewer.start_visible));

    // Viewer errors leave the hotkey thread running; stop it either way.
    if !app.shutdown_flag().is_requested() {
        app.quit();
    }
    if hotkey_thread.join().is_err() {
        warn!("Hotkey thread panicked during shutdown");
    }

    info!("multiclip stopped");
    result
}
