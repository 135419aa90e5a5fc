//! # Viewer Event Loop / 查看器事件循环
//!
//! Runs on the UI thread. One `select!` over:
//!
//! - the poll timer, which drains the notification channel whether or not
//!   the viewer is visible
//! - requests from the hotkey thread (show, shutdown)
//! - Ctrl+C as a signal, which only arrives while the terminal is cooked
//! - key presses, read only while the viewer is visible

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use mc_app::App;
use mc_core::notification::UiRequestReceiver;
use mc_core::{NotificationReceiver, UiRequest};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::bootstrap::tracing::ConsoleGate;

use super::state::{ViewerCommand, ViewerState};
use super::terminal::ViewerTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct ViewerLoop {
    app: Arc<App>,
    state: ViewerState,
    terminal: ViewerTerminal,
    notifications: NotificationReceiver,
    ui_requests: UiRequestReceiver,
    /// Present only while visible; a fresh stream per `show`.
    keys: Option<EventStream>,
    poll_interval: Duration,
    location: String,
}

impl ViewerLoop {
    pub fn new(
        app: Arc<App>,
        notifications: NotificationReceiver,
        ui_requests: UiRequestReceiver,
        gate: ConsoleGate,
        poll_interval: Duration,
        preview_chars: usize,
    ) -> Self {
        let location = app.storage_location();
        Self {
            app,
            state: ViewerState::new(preview_chars),
            terminal: ViewerTerminal::new(gate),
            notifications,
            ui_requests,
            keys: None,
            poll_interval,
            location,
        }
    }

    /// Runs until quit. With `start_visible` a terminal that cannot be
    /// initialised is an error; later show requests only log the failure.
    pub async fn run(mut self, start_visible: bool) -> Result<()> {
        if start_visible {
            self.show()?;
        } else {
            info!("Viewer hidden; ctrl+alt+b shows it, Ctrl+C quits");
        }

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            let visible = self.state.is_visible();
            let flow = tokio::select! {
                _ = ticker.tick() => {
                    let events = self.notifications.drain_all();
                    if self.state.tick(&events, self.app.store()) {
                        self.redraw();
                    }
                    Flow::Continue
                }

                request = self.ui_requests.recv() => self.handle_request(request),

                signal = &mut ctrl_c => {
                    if let Err(e) = signal {
                        warn!("Failed to listen for Ctrl+C: {}", e);
                    }
                    info!("Ctrl+C received");
                    self.app.quit();
                    Flow::Exit
                }

                maybe_event = next_terminal_event(&mut self.keys), if visible => {
                    self.handle_terminal_event(maybe_event)
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.terminal.leave()?;
        Ok(())
    }

    fn handle_request(&mut self, request: Option<UiRequest>) -> Flow {
        match request {
            Some(UiRequest::ShowViewer) => {
                if let Err(err) = self.show() {
                    error!(error = ?err, "Failed to open viewer");
                }
                Flow::Continue
            }
            Some(UiRequest::Shutdown) => {
                info!("Shutdown requested");
                Flow::Exit
            }
            None => Flow::Exit,
        }
    }

    fn handle_terminal_event(&mut self, event: Option<io::Result<Event>>) -> Flow {
        match event {
            Some(Ok(Event::Key(key))) => {
                let command = self.state.handle_key(key);
                let flow = self.apply(command);
                self.redraw();
                flow
            }
            Some(Ok(Event::Resize(_, _))) => {
                self.state.mark_dirty();
                self.redraw();
                Flow::Continue
            }
            Some(Ok(_)) => Flow::Continue,
            Some(Err(e)) => {
                warn!("Terminal event error: {}", e);
                Flow::Continue
            }
            None => {
                warn!("Terminal input closed");
                self.keys = None;
                Flow::Continue
            }
        }
    }

    fn apply(&mut self, command: ViewerCommand) -> Flow {
        match command {
            ViewerCommand::None => {}
            ViewerCommand::Refresh => self.state.refresh(self.app.store()),
            ViewerCommand::ClearAll => {
                self.app.clear_all();
                self.state.refresh(self.app.store());
            }
            ViewerCommand::Save => {
                if self.app.save() {
                    self.state
                        .show_notice("Saved", format!("Slots saved to {}", self.location));
                } else {
                    self.state.show_notice(
                        "Save failed",
                        format!("Could not write {}; see the log for details", self.location),
                    );
                }
            }
            ViewerCommand::Hide => self.hide(),
            ViewerCommand::Quit => {
                info!("Ctrl+C pressed in viewer");
                self.app.quit();
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    fn show(&mut self) -> Result<()> {
        self.terminal.enter()?;
        self.keys = Some(EventStream::new());
        self.state.show(self.app.store());
        self.redraw();
        Ok(())
    }

    fn hide(&mut self) {
        self.state.hide();
        self.keys = None;
        if let Err(err) = self.terminal.leave() {
            error!(error = ?err, "Failed to restore terminal");
        }
    }

    fn redraw(&mut self) {
        if !self.state.needs_redraw() {
            return;
        }
        match self.terminal.draw(&self.state, &self.location) {
            Ok(()) => self.state.mark_drawn(),
            Err(err) => error!(error = ?err, "Failed to draw viewer"),
        }
    }
}

async fn next_terminal_event(keys: &mut Option<EventStream>) -> Option<io::Result<Event>> {
    match keys {
        Some(stream) => stream.next().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use mc_core::hotkey::{default_bindings, Key};
    use mc_core::ports::{
        ClipboardError, SelectionActionError, SelectionActionPort, SlotRepositoryPort,
        SystemClipboardPort,
    };
    use mc_core::slot::empty_contents;
    use mc_core::slot::preview::TABLE_PREVIEW_CHARS;
    use mc_core::{AppConfig, SlotIndex};
    use mc_infra::FileSlotRepository;

    use crate::bootstrap::wiring::assemble;

    use super::*;

    #[derive(Default)]
    struct MemoryClipboard(Mutex<Option<String>>);

    impl SystemClipboardPort for MemoryClipboard {
        fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct IdleSelection;

    impl SelectionActionPort for IdleSelection {
        fn trigger_copy(&self) -> Result<(), SelectionActionError> {
            Ok(())
        }

        fn trigger_paste(&self) -> Result<(), SelectionActionError> {
            Ok(())
        }
    }

    /// A loop over `slots_path`, shown without a real terminal.
    fn viewer_over(slots_path: &Path) -> ViewerLoop {
        let wired = assemble(
            &AppConfig::default(),
            Arc::new(MemoryClipboard::default()),
            Arc::new(IdleSelection),
            Arc::new(FileSlotRepository::new(slots_path)),
            default_bindings(Key::Backquote),
        );
        let mut viewer = ViewerLoop::new(
            wired.app,
            wired.notifications,
            wired.ui_requests,
            ConsoleGate::new(),
            Duration::from_millis(100),
            TABLE_PREVIEW_CHARS,
        );
        viewer.state.show(viewer.app.store());
        viewer
    }

    #[test]
    fn clear_all_empties_the_slot_file_and_the_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.bin");
        let mut contents = empty_contents();
        contents[1] = "keep me?".to_string();
        FileSlotRepository::new(&path).save(&contents).unwrap();
        let mut viewer = viewer_over(&path);
        assert!(viewer.state.rows()[1].filled);

        assert_eq!(viewer.apply(ViewerCommand::ClearAll), Flow::Continue);

        assert!(viewer.state.rows().iter().all(|row| !row.filled));
        assert_eq!(FileSlotRepository::new(&path).load().unwrap(), Some(empty_contents()));
    }

    #[test]
    fn save_confirms_with_the_storage_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.bin");
        let mut viewer = viewer_over(&path);
        viewer
            .app
            .store()
            .set(SlotIndex::from_number(4).unwrap(), "saved by hand");

        viewer.apply(ViewerCommand::Save);

        let notice = viewer.state.notice().unwrap();
        assert_eq!(notice.title, "Saved");
        assert!(notice.message.contains(&path.display().to_string()));
        let on_disk = FileSlotRepository::new(&path).load().unwrap().unwrap();
        assert_eq!(on_disk[3], "saved by hand");
    }

    #[test]
    fn failed_save_shows_a_failure_notice() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file.
        let mut viewer = viewer_over(dir.path());

        viewer.apply(ViewerCommand::Save);

        assert_eq!(viewer.state.notice().unwrap().title, "Save failed");
    }

    #[test]
    fn hide_without_a_terminal_only_changes_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut viewer = viewer_over(&dir.path().join("slots.bin"));

        assert_eq!(viewer.apply(ViewerCommand::Hide), Flow::Continue);

        assert!(!viewer.state.is_visible());
        assert!(viewer.keys.is_none());
    }

    #[test]
    fn quit_saves_and_requests_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.bin");
        let mut viewer = viewer_over(&path);

        assert_eq!(viewer.apply(ViewerCommand::Quit), Flow::Exit);

        assert!(viewer.app.shutdown_flag().is_requested());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn hidden_loop_exits_on_a_shutdown_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.bin");
        let mut viewer = viewer_over(&path);
        viewer.state.hide();
        let app = viewer.app.clone();
        app.quit();

        let result = tokio::time::timeout(Duration::from_secs(5), viewer.run(false)).await;

        assert!(result.expect("loop should stop on shutdown").is_ok());
        assert!(path.exists());
    }
}
