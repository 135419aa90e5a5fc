use std::time::Duration;

use global_hotkey::GlobalHotKeyEvent;

/// Blocks up to `timeout` for the next shortcut event.
#[cfg(not(windows))]
pub(super) fn next_event(timeout: Duration) -> Option<GlobalHotKeyEvent> {
    GlobalHotKeyEvent::receiver().recv_timeout(timeout).ok()
}

/// Windows only posts `WM_HOTKEY` to the registering thread, and the event is
/// produced while that message is dispatched, so the queue is drained in
/// short slices until something arrives or `timeout` passes.
#[cfg(windows)]
pub(super) fn next_event(timeout: Duration) -> Option<GlobalHotKeyEvent> {
    use std::time::Instant;

    const SLICE: Duration = Duration::from_millis(10);
    let deadline = Instant::now() + timeout;
    loop {
        pump_thread_messages();
        if let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            return Some(event);
        }
        let now = Instant::now();
        if now >= deadline {
            return None;
        }
        std::thread::sleep(SLICE.min(deadline - now));
    }
}

pub(super) fn try_next_event() -> Option<GlobalHotKeyEvent> {
    GlobalHotKeyEvent::receiver().try_recv().ok()
}

#[cfg(windows)]
fn pump_thread_messages() {
    use std::ptr::null_mut;
    use winapi::um::winuser::{DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE};

    // SAFETY: MSG is plain data; PeekMessageW only touches the current
    // thread's queue and fills `msg` before it is read.
    unsafe {
        let mut msg: MSG = std::mem::zeroed();
        while PeekMessageW(&mut msg, null_mut(), 0, 0, PM_REMOVE) != 0 {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
