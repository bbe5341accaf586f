//! Scripted in-memory backend used by unit tests.
//!
//! Clones share state, so a test can hold one handle while the controller
//! and session hold others, then inject events and inspect the resulting
//! cursor state.

use crate::error::{CaptureError, CaptureResult};
use crate::platform::{MonitorHandle, MonitorHandler, PointerEvent, PointerPlatform};
use crate::types::{CursorState, PointerDelta, ScreenPoint};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct MockState {
    cursor: CursorState,
    pending: PointerDelta,
    position: ScreenPoint,
    fail_install: bool,
    installed: bool,
    observe_button_up: bool,
    handler: Option<MonitorHandler>,
    hide_calls: u32,
    show_calls: u32,
    associate_calls: u32,
}

#[derive(Clone)]
pub struct MockPlatform {
    state: Arc<Mutex<MockState>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Make the next `install_monitor` call fail.
    pub fn set_fail_install(&self, fail: bool) {
        self.state.lock().fail_install = fail;
    }

    /// Queue raw movement, accumulating like the OS delta counter does.
    pub fn push_delta(&self, dx: f64, dy: f64) {
        let mut state = self.state.lock();
        state.pending.dx += dx;
        state.pending.dy += dy;
    }

    pub fn set_position(&self, x: f64, y: f64) {
        self.state.lock().position = ScreenPoint { x, y };
    }

    pub fn cursor(&self) -> CursorState {
        self.state.lock().cursor
    }

    pub fn monitor_installed(&self) -> bool {
        self.state.lock().installed
    }

    pub fn hide_calls(&self) -> u32 {
        self.state.lock().hide_calls
    }

    pub fn show_calls(&self) -> u32 {
        self.state.lock().show_calls
    }

    pub fn associate_calls(&self) -> u32 {
        self.state.lock().associate_calls
    }

    /// Deliver an event to the installed monitor, honoring the event mask it
    /// was installed with. The handler runs without the mock lock held, so it
    /// may call back into the platform.
    pub fn emit(&self, event: PointerEvent) {
        let (handler, observe_button_up) = {
            let mut state = self.state.lock();
            (state.handler.take(), state.observe_button_up)
        };
        let Some(handler) = handler else { return };

        let masked_out = event == PointerEvent::ButtonReleased && !observe_button_up;
        if !masked_out {
            handler(event);
        }

        let mut state = self.state.lock();
        if state.installed && state.handler.is_none() {
            state.handler = Some(handler);
        }
    }
}

impl PointerPlatform for MockPlatform {
    fn set_cursor_associated(&self, associated: bool) {
        let mut state = self.state.lock();
        state.cursor.associated = associated;
        state.associate_calls += 1;
    }

    fn set_cursor_hidden(&self, hidden: bool) {
        let mut state = self.state.lock();
        state.cursor.visible = !hidden;
        if hidden {
            state.hide_calls += 1;
        } else {
            state.show_calls += 1;
        }
    }

    fn take_delta(&self) -> PointerDelta {
        std::mem::take(&mut self.state.lock().pending)
    }

    fn cursor_position(&self) -> ScreenPoint {
        self.state.lock().position
    }

    fn install_monitor(
        &self,
        observe_button_up: bool,
        handler: MonitorHandler,
    ) -> CaptureResult<Box<dyn MonitorHandle>> {
        let mut state = self.state.lock();
        if state.fail_install {
            return Err(CaptureError::ListenerInstallFailed(
                "install rejected by test".to_string(),
            ));
        }
        state.handler = Some(handler);
        state.installed = true;
        state.observe_button_up = observe_button_up;
        Ok(Box::new(MockMonitor {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockMonitor {
    state: Arc<Mutex<MockState>>,
}

impl MonitorHandle for MockMonitor {
    fn uninstall(self: Box<Self>) {
        let mut state = self.state.lock();
        state.installed = false;
        state.handler = None;
    }
}
