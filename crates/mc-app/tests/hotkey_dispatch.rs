mod common;

use std::time::Duration;

use mc_app::HotkeyDispatcher;
use mc_core::hotkey::default_bindings;
use mc_core::{Key, KeyCombo, SlotIndex, UiRequest};
use tempfile::TempDir;

use common::{harness, FakeRegistrar};

fn combo(text: &str) -> KeyCombo {
    text.parse().unwrap()
}

#[test]
fn registration_is_best_effort() {
    let dir = TempDir::new().unwrap();
    let h = harness(&dir.path().join("slots.bin"));
    let dispatcher = HotkeyDispatcher::new(h.app.clone(), default_bindings(Key::Backquote));
    let mut registrar = FakeRegistrar::rejecting([combo("ctrl+3"), combo("ctrl+alt+b")]);

    let report = dispatcher.register_all(&mut registrar);

    assert_eq!(registrar.attempts.len(), 24);
    assert_eq!(report.registered.len(), 22);
    assert_eq!(report.failures.len(), 2);
    assert!(!report.all_registered());
    let failed: Vec<_> = report.failures.iter().map(|f| f.binding.combo).collect();
    assert_eq!(failed, vec![combo("ctrl+3"), combo("ctrl+alt+b")]);
}

#[test]
fn pressed_shortcuts_run_their_actions() {
    let dir = TempDir::new().unwrap();
    let mut h = harness(&dir.path().join("slots.bin"));
    let dispatcher = HotkeyDispatcher::new(h.app.clone(), default_bindings(Key::Backquote));
    let mut registrar = FakeRegistrar::default();
    assert!(dispatcher.register_all(&mut registrar).all_registered());

    h.clipboard.select("from hotkey");
    registrar.press("ctrl+0");
    registrar.press("ctrl+shift+`");
    registrar.press("ctrl+alt+b");
    registrar.press("ctrl+alt+q");

    dispatcher.run_until_shutdown(&mut registrar, Duration::from_millis(1));

    let slot10 = SlotIndex::from_number(10).unwrap();
    assert_eq!(h.app.store().get(slot10).as_deref(), Some("from hotkey"));
    assert_eq!(
        h.selection.pasted.lock().unwrap().as_slice(),
        ["from hotkey".to_string()]
    );
    assert_eq!(
        h.ui_requests.drain_all(),
        vec![UiRequest::ShowViewer, UiRequest::Shutdown]
    );
    assert!(registrar.unregistered);
    assert!(registrar.handlers.is_empty());
}

#[test]
fn loop_exits_immediately_when_already_shut_down() {
    let dir = TempDir::new().unwrap();
    let h = harness(&dir.path().join("slots.bin"));
    let dispatcher = HotkeyDispatcher::new(h.app.clone(), default_bindings(Key::Backquote));
    let mut registrar = FakeRegistrar::default();
    h.app.shutdown_flag().request();

    dispatcher.run_until_shutdown(&mut registrar, Duration::from_millis(1));

    assert_eq!(registrar.pumps, 0);
    assert!(registrar.unregistered);
}
