//! Stub backend for platforms without pointer-lock primitives.

use crate::error::{CaptureError, CaptureResult};
use crate::platform::{MonitorHandle, MonitorHandler, PointerPlatform};
use crate::types::{PointerDelta, ScreenPoint};

/// Placeholder backend whose constructor always fails; the trait impl only
/// exists so downstream generic code compiles on every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatform;

impl UnsupportedPlatform {
    pub fn new() -> CaptureResult<Self> {
        Err(CaptureError::UnsupportedPlatform)
    }
}

impl PointerPlatform for UnsupportedPlatform {
    fn set_cursor_associated(&self, _associated: bool) {}

    fn set_cursor_hidden(&self, _hidden: bool) {}

    fn take_delta(&self) -> PointerDelta {
        PointerDelta::ZERO
    }

    fn cursor_position(&self) -> ScreenPoint {
        ScreenPoint::default()
    }

    fn install_monitor(
        &self,
        _observe_button_up: bool,
        _handler: MonitorHandler,
    ) -> CaptureResult<Box<dyn MonitorHandle>> {
        Err(CaptureError::UnsupportedPlatform)
    }
}
