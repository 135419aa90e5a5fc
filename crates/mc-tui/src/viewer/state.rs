//! Viewer state machine: {Hidden, Visible}, the rows on display and an
//! optional modal notice. No terminal I/O happens here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mc_core::slot::preview::slot_preview;
use mc_core::{NotificationEvent, SlotIndex, SlotStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    /// 1-based.
    pub number: usize,
    pub preview: String,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    None,
    Refresh,
    ClearAll,
    Save,
    Hide,
    Quit,
}

#[derive(Debug)]
pub struct ViewerState {
    visibility: Visibility,
    rows: Vec<SlotRow>,
    notice: Option<Notice>,
    dirty: bool,
    preview_chars: usize,
}

impl ViewerState {
    pub fn new(preview_chars: usize) -> Self {
        Self {
            visibility: Visibility::Hidden,
            rows: Vec::new(),
            notice: None,
            dirty: true,
            preview_chars,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn rows(&self) -> &[SlotRow] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Re-reads every slot and forces a full redraw.
    pub fn show(&mut self, store: &SlotStore) {
        self.refresh(store);
        self.visibility = Visibility::Visible;
    }

    /// Rows and notice are kept for the next `show`.
    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    pub fn refresh(&mut self, store: &SlotStore) {
        let contents = store.snapshot();
        self.rows = SlotIndex::all()
            .map(|index| {
                let text = &contents[index.position()];
                SlotRow {
                    number: index.number(),
                    preview: slot_preview(Some(text), self.preview_chars),
                    filled: !text.is_empty(),
                }
            })
            .collect();
        self.dirty = true;
    }

    /// Applies drained notifications. Returns whether a redraw is due now.
    pub fn tick(&mut self, events: &[NotificationEvent], store: &SlotStore) -> bool {
        if !events.is_empty() {
            self.refresh(store);
        }
        self.needs_redraw()
    }

    pub fn needs_redraw(&self) -> bool {
        self.is_visible() && self.dirty
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn show_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.into(),
            message: message.into(),
        });
        self.dirty = true;
    }

    /// Keys only count while visible; anything delivered while hidden was
    /// typed at the shell.
    pub fn handle_key(&mut self, key: KeyEvent) -> ViewerCommand {
        if !self.is_visible() || key.kind != KeyEventKind::Press {
            return ViewerCommand::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return ViewerCommand::Quit;
        }
        if self.notice.take().is_some() {
            self.dirty = true;
            return ViewerCommand::None;
        }

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => ViewerCommand::Refresh,
            KeyCode::Char('c') | KeyCode::Char('C') => ViewerCommand::ClearAll,
            KeyCode::Char('s') | KeyCode::Char('S') => ViewerCommand::Save,
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => ViewerCommand::Hide,
            _ => ViewerCommand::None,
        }
    }
}
