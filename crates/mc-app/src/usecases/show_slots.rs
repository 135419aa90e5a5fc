use std::sync::Arc;

use mc_core::notification::UiRequestSender;
use mc_core::slot::preview::{slot_preview, CONSOLE_PREVIEW_CHARS};
use mc_core::{SlotIndex, SlotStore, UiRequest};
use tracing::info;

/// Dumps the slots to the log and asks the UI thread to open the viewer.
pub struct ShowSlots {
    store: Arc<SlotStore>,
    ui_requests: UiRequestSender,
}

impl ShowSlots {
    pub fn new(store: Arc<SlotStore>, ui_requests: UiRequestSender) -> Self {
        Self { store, ui_requests }
    }

    pub fn execute(&self) {
        for line in slot_listing(&self.store) {
            info!("{line}");
        }
        self.ui_requests.push(UiRequest::ShowViewer);
    }
}

/// One `Slot N: preview` line per slot, in slot order.
pub fn slot_listing(store: &SlotStore) -> Vec<String> {
    let contents = store.snapshot();
    SlotIndex::all()
        .map(|index| {
            let text = &contents[index.position()];
            let content = (!text.is_empty()).then_some(text.as_str());
            format!(
                "Slot {index}: {}",
                slot_preview(content, CONSOLE_PREVIEW_CHARS)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use mc_core::notification::ui_request_channel;

    use super::*;

    #[test]
    fn listing_covers_every_slot_with_placeholders() {
        let store = SlotStore::new();
        store.set(SlotIndex::from_number(1).unwrap(), "hello world");
        store.set(
            SlotIndex::from_number(10).unwrap(),
            "a fairly long line that will be shortened",
        );

        let lines = slot_listing(&store);

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Slot 1: hello world");
        assert_eq!(lines[1], "Slot 2: <empty>");
        assert_eq!(lines[9], "Slot 10: a fairly long line t...");
    }

    #[test]
    fn execute_requests_the_viewer() {
        let (tx, mut rx) = ui_request_channel();
        let show = ShowSlots::new(Arc::new(SlotStore::new()), tx);

        show.execute();

        assert_eq!(rx.drain_all(), vec![UiRequest::ShowViewer]);
    }
}
