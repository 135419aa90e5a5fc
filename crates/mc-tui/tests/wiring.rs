use std::sync::{Arc, Mutex};

use mc_core::hotkey::{default_bindings, Key};
use mc_core::ports::{
    ClipboardError, SelectionActionError, SelectionActionPort, SlotRepositoryPort,
    SystemClipboardPort,
};
use mc_core::slot::empty_contents;
use mc_core::{AppConfig, HotkeyAction, NotificationEvent, SlotIndex, UiRequest};
use mc_infra::FileSlotRepository;
use mc_tui::bootstrap::wiring::assemble;

#[derive(Default)]
struct StaticClipboard {
    content: Mutex<Option<String>>,
}

impl SystemClipboardPort for StaticClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.content.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct NoKeystrokes;

impl SelectionActionPort for NoKeystrokes {
    fn trigger_copy(&self) -> Result<(), SelectionActionError> {
        Ok(())
    }

    fn trigger_paste(&self) -> Result<(), SelectionActionError> {
        Ok(())
    }
}

fn fast_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.clipboard.copy_attempts = 1;
    config.clipboard.copy_initial_delay_ms = 0;
    config.clipboard.copy_retry_delay_ms = 0;
    config.clipboard.paste_settle_delay_ms = 0;
    config
}

#[test]
fn assembled_app_starts_from_the_slot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.bin");
    let mut contents = empty_contents();
    contents[4] = "from last run".to_string();
    FileSlotRepository::new(&path).save(&contents).unwrap();

    let wired = assemble(
        &fast_config(),
        Arc::new(StaticClipboard::default()),
        Arc::new(NoKeystrokes),
        Arc::new(FileSlotRepository::new(&path)),
        default_bindings(Key::Backquote),
    );

    assert_eq!(
        wired.app.store().get(SlotIndex::from_number(5).unwrap()).as_deref(),
        Some("from last run")
    );
    assert_eq!(wired.bindings.len(), 24);
    assert_eq!(wired.app.storage_location(), path.display().to_string());
}

#[test]
fn actions_reach_the_viewer_channels() {
    let dir = tempfile::tempdir().unwrap();
    let clipboard = Arc::new(StaticClipboard::default());
    clipboard.write_text("selected text").unwrap();

    let mut wired = assemble(
        &fast_config(),
        clipboard,
        Arc::new(NoKeystrokes),
        Arc::new(FileSlotRepository::new(dir.path().join("slots.bin"))),
        default_bindings(Key::Backquote),
    );

    wired
        .app
        .execute(HotkeyAction::CopyToSlot(SlotIndex::from_number(1).unwrap()));
    wired.app.execute(HotkeyAction::ShowViewer);

    assert_eq!(wired.notifications.drain_all(), vec![NotificationEvent::Update]);
    assert_eq!(wired.ui_requests.drain_all(), vec![UiRequest::ShowViewer]);
    assert!(dir.path().join("slots.bin").exists());
}
