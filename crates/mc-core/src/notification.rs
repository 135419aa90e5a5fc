//! Cross-thread event channels.
//!
//! Background handlers never touch UI state directly; they push events here
//! and the UI thread drains them on its poll timer. Pushing never blocks and
//! draining never waits.

use std::fmt;

use tokio::sync::mpsc;

/// Tells the viewer its displayed data is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A slot changed.
    Update,
    /// All slots were cleared.
    Clear,
}

/// Requests from the background thread that only the UI thread may carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRequest {
    ShowViewer,
    Shutdown,
}

pub type NotificationSender = EventSender<NotificationEvent>;
pub type NotificationReceiver = EventReceiver<NotificationEvent>;
pub type UiRequestSender = EventSender<UiRequest>;
pub type UiRequestReceiver = EventReceiver<UiRequest>;

/// Creates an unbounded FIFO channel.
pub fn event_channel<T>() -> (EventSender<T>, EventReceiver<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, EventReceiver { rx })
}

pub fn notification_channel() -> (NotificationSender, NotificationReceiver) {
    event_channel()
}

pub fn ui_request_channel() -> (UiRequestSender, UiRequestReceiver) {
    event_channel()
}

pub struct EventSender<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: fmt::Debug> EventSender<T> {
    /// Enqueues `event` without blocking.
    ///
    /// Returns `false` when the receiving side is gone; the event is dropped.
    pub fn push(&self, event: T) -> bool {
        match self.tx.send(event) {
            Ok(()) => true,
            Err(mpsc::error::SendError(event)) => {
                tracing::debug!(?event, "event receiver dropped, discarding event");
                false
            }
        }
    }
}

impl<T> Clone for EventSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> fmt::Debug for EventSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

pub struct EventReceiver<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> EventReceiver<T> {
    /// Takes every pending event, oldest first. Returns immediately.
    pub fn drain_all(&mut self) -> Vec<T> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Waits for the next event; `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

impl<T> fmt::Debug for EventReceiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventReceiver").finish_non_exhaustive()
    }
}
