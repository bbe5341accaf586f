//! macOS pointer backend
//!
//! Cursor association and raw deltas go through CoreGraphics
//! (`CGAssociateMouseAndMouseCursorPosition`, `CGGetLastMouseDelta` — neither
//! is exposed by a binding crate, so they are declared here directly), cursor
//! visibility and position through AppKit's `NSCursor`/`NSEvent`.
//!
//! Movement observation uses a local `NSEvent` monitor: capture targets the
//! focused application, and global monitors only see events routed to other
//! apps. The monitor handler returns the event unmodified so the rest of the
//! app still receives it.

use crate::error::{CaptureError, CaptureResult};
use crate::platform::{MonitorHandle, MonitorHandler, PointerEvent, PointerPlatform};
use crate::types::{PointerDelta, ScreenPoint};
use block2::RcBlock;
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2_app_kit::{NSCursor, NSEvent, NSEventMask, NSEventType};
use std::ptr::NonNull;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGAssociateMouseAndMouseCursorPosition(connected: u32) -> i32;
    fn CGGetLastMouseDelta(delta_x: *mut i32, delta_y: *mut i32);
}

/// Pointer backend backed by CoreGraphics and AppKit.
///
/// Monitor installation and removal must happen on a thread with a running
/// run loop (in practice: the main thread).
#[derive(Debug, Clone, Copy, Default)]
pub struct MacosPlatform;

impl MacosPlatform {
    pub fn new() -> CaptureResult<Self> {
        Ok(Self)
    }
}

impl PointerPlatform for MacosPlatform {
    fn set_cursor_associated(&self, associated: bool) {
        unsafe {
            CGAssociateMouseAndMouseCursorPosition(associated as u32);
        }
    }

    fn set_cursor_hidden(&self, hidden: bool) {
        unsafe {
            if hidden {
                NSCursor::hide();
            } else {
                NSCursor::unhide();
            }
        }
    }

    fn take_delta(&self) -> PointerDelta {
        let mut dx: i32 = 0;
        let mut dy: i32 = 0;
        unsafe {
            CGGetLastMouseDelta(&mut dx, &mut dy);
        }
        PointerDelta {
            dx: dx as f64,
            dy: dy as f64,
        }
    }

    fn cursor_position(&self) -> ScreenPoint {
        let location = unsafe { NSEvent::mouseLocation() };
        ScreenPoint {
            x: location.x,
            y: location.y,
        }
    }

    fn install_monitor(
        &self,
        observe_button_up: bool,
        handler: MonitorHandler,
    ) -> CaptureResult<Box<dyn MonitorHandle>> {
        let mut mask = NSEventMask::MouseMoved
            | NSEventMask::LeftMouseDragged
            | NSEventMask::RightMouseDragged
            | NSEventMask::OtherMouseDragged;
        if observe_button_up {
            mask = mask
                | NSEventMask::LeftMouseUp
                | NSEventMask::RightMouseUp
                | NSEventMask::OtherMouseUp;
        }

        let block = RcBlock::new(move |event: NonNull<NSEvent>| -> *mut NSEvent {
            let kind = unsafe { event.as_ref().r#type() };
            if let Some(classified) = classify(kind) {
                handler(classified);
            }
            // Pass the event through untouched
            event.as_ptr()
        });

        let monitor = unsafe { NSEvent::addLocalMonitorForEventsMatchingMask_handler(mask, &block) };

        match monitor {
            Some(monitor) => {
                tracing::debug!("local NSEvent monitor installed");
                Ok(Box::new(MacosMonitor {
                    monitor: Some(monitor),
                }))
            }
            None => Err(CaptureError::ListenerInstallFailed(
                "NSEvent local monitor could not be created".to_string(),
            )),
        }
    }
}

fn classify(kind: NSEventType) -> Option<PointerEvent> {
    if kind == NSEventType::MouseMoved
        || kind == NSEventType::LeftMouseDragged
        || kind == NSEventType::RightMouseDragged
        || kind == NSEventType::OtherMouseDragged
    {
        Some(PointerEvent::Moved)
    } else if kind == NSEventType::LeftMouseUp
        || kind == NSEventType::RightMouseUp
        || kind == NSEventType::OtherMouseUp
    {
        Some(PointerEvent::ButtonReleased)
    } else {
        None
    }
}

/// Keeps the installed monitor alive; removal happens on uninstall or drop.
struct MacosMonitor {
    monitor: Option<Retained<AnyObject>>,
}

impl MacosMonitor {
    fn remove(&mut self) {
        if let Some(monitor) = self.monitor.take() {
            unsafe {
                NSEvent::removeMonitor(&monitor);
            }
            tracing::debug!("local NSEvent monitor removed");
        }
    }
}

impl MonitorHandle for MacosMonitor {
    fn uninstall(mut self: Box<Self>) {
        self.remove();
    }
}

impl Drop for MacosMonitor {
    fn drop(&mut self) {
        self.remove();
    }
}
