//! Platform-specific pointer backends
//!
//! This module defines the seam between the generic controller/session logic
//! and the OS: a [`PointerPlatform`] implementation provides the raw cursor
//! primitives and the movement-listener mechanism for one platform.

use crate::error::CaptureResult;
use crate::types::{PointerDelta, ScreenPoint};

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(not(target_os = "macos"))]
pub mod unsupported;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(target_os = "macos")]
pub use macos::MacosPlatform as NativePlatform;

#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedPlatform as NativePlatform;

/// A pointer input event observed by an installed monitor, already
/// classified down to what capture sessions care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved or was dragged (any button).
    Moved,
    /// A mouse button was released (any button). Only delivered when the
    /// monitor was installed with `observe_button_up`.
    ButtonReleased,
}

/// Callback invoked by the platform on every qualifying input event.
///
/// Runs on the platform's event-delivery thread; it must not block.
pub type MonitorHandler = Box<dyn Fn(PointerEvent) + Send + 'static>;

/// Handle to an installed movement monitor. Uninstalling (or dropping) the
/// handle removes the observer; no callbacks run afterwards.
pub trait MonitorHandle {
    fn uninstall(self: Box<Self>);
}

/// Raw OS pointer primitives for one platform.
///
/// Calls are direct and side-effecting with no failure mode beyond platform
/// unavailability, which surfaces once, at construction time. Implementations
/// do not track state; idempotency and hide/unhide balancing live in
/// [`PointerController`](crate::controller::PointerController).
pub trait PointerPlatform {
    /// Associate (`true`) or disassociate (`false`) physical mouse movement
    /// from the visible cursor position.
    fn set_cursor_associated(&self, associated: bool);

    /// Hide (`true`) or show (`false`) the cursor. Callers must keep
    /// hide/show calls balanced; the OS counterpart is reference-counted.
    fn set_cursor_hidden(&self, hidden: bool);

    /// Accumulated relative movement since the previous call. Destructive
    /// read: the accumulator resets to zero.
    fn take_delta(&self) -> PointerDelta;

    /// Current absolute cursor position in screen coordinates.
    fn cursor_position(&self) -> ScreenPoint;

    /// Install a monitor observing move/drag events (all buttons) and, when
    /// `observe_button_up` is set, button-release events.
    fn install_monitor(
        &self,
        observe_button_up: bool,
        handler: MonitorHandler,
    ) -> CaptureResult<Box<dyn MonitorHandle>>;
}

/// Construct the pointer backend for the current platform.
///
/// Fails with [`UnsupportedPlatform`](crate::error::CaptureError::UnsupportedPlatform)
/// on targets without pointer-lock primitives.
pub fn native() -> CaptureResult<NativePlatform> {
    NativePlatform::new()
}
