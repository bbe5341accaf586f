//! Pointer controller
//!
//! Thin façade over the platform primitives, plus the shadow cursor state the
//! OS does not let us read back. The shadow state keeps `lock`/`unlock` and
//! `hide`/`show` idempotent and guarantees at most one OS-level hide is
//! outstanding at any time — `NSCursor.hide`/`ShowCursor` are
//! reference-counted, so unbalanced calls would leave the cursor stuck.
//!
//! Controller calls are not reentrant-safe; callers serialize access (the
//! capture session shares one controller behind a mutex for exactly this
//! reason).

use crate::platform::PointerPlatform;
use crate::types::{CursorState, PointerDelta, ScreenPoint};

pub struct PointerController<P: PointerPlatform> {
    platform: P,
    state: CursorState,
}

impl<P: PointerPlatform> PointerController<P> {
    /// Create a controller assuming the OS baseline (associated, visible).
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            state: CursorState::default(),
        }
    }

    /// Disassociate pointer movement from the visible cursor. Subsequent
    /// motion is only observable through [`last_delta`](Self::last_delta).
    pub fn lock(&mut self) {
        self.set_associated(false);
    }

    /// Re-associate pointer movement with the visible cursor. Idempotent.
    pub fn unlock(&mut self) {
        self.set_associated(true);
    }

    /// Hide the cursor. Idempotent and independent of lock state.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Show the cursor. Idempotent.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Accumulated relative movement since the previous call. Destructive
    /// read: returns `(0, 0)` when no movement occurred in between.
    pub fn last_delta(&self) -> PointerDelta {
        self.platform.take_delta()
    }

    /// Current absolute cursor position, valid regardless of lock state.
    pub fn position(&self) -> ScreenPoint {
        self.platform.cursor_position()
    }

    /// Snapshot of the cursor state this controller has applied.
    pub fn cursor_state(&self) -> CursorState {
        self.state
    }

    /// Drive association and visibility to a previously taken snapshot.
    pub fn restore(&mut self, state: CursorState) {
        self.set_associated(state.associated);
        self.set_visible(state.visible);
    }

    /// Force the OS back to the baseline (associated, visible), bypassing the
    /// shadow-state guards.
    ///
    /// Recovery path for a host-application hot restart: the previous library
    /// instance may have left the cursor hidden and locked, and a fresh
    /// controller's shadow state knows nothing about it.
    pub fn reset(&mut self) {
        self.platform.set_cursor_associated(true);
        self.platform.set_cursor_hidden(false);
        self.state = CursorState::default();
    }

    fn set_associated(&mut self, associated: bool) {
        if self.state.associated != associated {
            self.platform.set_cursor_associated(associated);
            self.state.associated = associated;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if self.state.visible != visible {
            self.platform.set_cursor_hidden(!visible);
            self.state.visible = visible;
        }
    }
}
