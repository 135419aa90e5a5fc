//! # Application Dependencies / 应用依赖
//!
//! Groups everything [`App`](crate::App) is built from.
//! 打包 App 构造所需的全部依赖。
//!
//! **Note / 注意**: plain parameter grouping, no build steps and no defaults.
//! 仅用于参数打包，无构建步骤，无默认值。

use std::sync::Arc;

use mc_core::notification::UiRequestSender;
use mc_core::ports::{SelectionActionPort, SystemClipboardPort};
use mc_core::{NotificationSender, SlotStore};

use crate::bridge::BridgeTiming;
use crate::lifecycle::ShutdownFlag;
use crate::persistence::PersistenceGateway;

pub struct AppDeps {
    // Platform / 平台
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub selection: Arc<dyn SelectionActionPort>,

    // Storage / 存储
    pub gateway: Arc<PersistenceGateway>,
    /// Usually the result of [`PersistenceGateway::load`].
    pub store: Arc<SlotStore>,

    // Channels / 通道
    pub notifications: NotificationSender,
    pub ui_requests: UiRequestSender,

    pub timing: BridgeTiming,
    pub shutdown: ShutdownFlag,
}
