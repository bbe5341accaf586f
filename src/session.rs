//! Capture session
//!
//! Owns the process-wide "locked & hidden cursor, delta-streaming" mode: at
//! most one capture is active at a time, and the cursor state captured at
//! start is restored on every exit path — explicit stop, auto-release on
//! pointer up, or drop.
//!
//! Event delivery is push-based: the platform invokes the monitor callback on
//! its own thread, and the callback forwards deltas onto an unbounded channel
//! without blocking. Consumers must drain the [`DeltaStream`] promptly; there
//! is no additional buffering or backpressure.
//!
//! Control calls (`start`, `stop`, `reset`) are a single-writer contract: one
//! logical owner drives the session. The controller itself sits behind a
//! mutex only because the auto-release path restores cursor state from the
//! monitor callback.

use crate::controller::PointerController;
use crate::error::{CaptureError, CaptureResult};
use crate::platform::{self, MonitorHandle, MonitorHandler, NativePlatform, PointerEvent, PointerPlatform};
use crate::types::{CaptureConfig, CursorState, PointerDelta, SessionEvent};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

pub struct CaptureSession<P: PointerPlatform> {
    platform: P,
    controller: Arc<Mutex<PointerController<P>>>,
    active: Option<ActiveCapture>,
}

struct ActiveCapture {
    monitor: Box<dyn MonitorHandle>,
    snapshot: CursorState,
    /// Set by the monitor callback when the session auto-releases. Cursor
    /// state is already restored at that point; only the monitor itself is
    /// left for the owner to remove (AppKit monitors must not be removed
    /// from inside their own handler).
    released: Arc<AtomicBool>,
}

impl CaptureSession<NativePlatform> {
    /// Capture session backed by the current platform.
    pub fn native() -> CaptureResult<Self> {
        Ok(Self::new(platform::native()?))
    }
}

impl<P: PointerPlatform + Clone + Send + 'static> CaptureSession<P> {
    pub fn new(platform: P) -> Self {
        Self {
            controller: Arc::new(Mutex::new(PointerController::new(platform.clone()))),
            platform,
            active: None,
        }
    }

    /// Enter capture mode and return the session's output sequence.
    ///
    /// Locks the cursor to its position, hides it, and installs the movement
    /// listener. Fails with [`CaptureError::AlreadyActive`] while a capture
    /// is active — there is no implicit restart. If listener installation
    /// fails, the cursor state is rolled back before the error is returned;
    /// no partial lock/hide is ever left applied.
    ///
    /// Each call produces a logically new stream; streams from earlier
    /// captures stay ended.
    pub fn start(&mut self, config: CaptureConfig) -> CaptureResult<DeltaStream> {
        if self.is_active() {
            return Err(CaptureError::AlreadyActive);
        }
        // Collapse a capture that already auto-released: deferred monitor
        // removal happens here, on the owning thread.
        self.teardown();

        let snapshot = {
            let mut controller = self.controller.lock();
            let snapshot = controller.cursor_state();
            controller.lock();
            controller.hide();
            snapshot
        };

        let (tx, rx) = mpsc::channel();
        let released = Arc::new(AtomicBool::new(false));

        let handler: MonitorHandler = {
            let controller = Arc::clone(&self.controller);
            let released = Arc::clone(&released);
            let release_on_pointer_up = config.release_on_pointer_up;
            Box::new(move |event| {
                if released.load(Ordering::Acquire) {
                    return;
                }
                match event {
                    PointerEvent::Moved => {
                        let delta = controller.lock().last_delta();
                        tracing::trace!(dx = delta.dx, dy = delta.dy, "pointer delta");
                        let _ = tx.send(SessionEvent::Delta(delta));
                    }
                    PointerEvent::ButtonReleased => {
                        if release_on_pointer_up {
                            controller.lock().restore(snapshot);
                            released.store(true, Ordering::Release);
                            let _ = tx.send(SessionEvent::End);
                            tracing::info!("capture session auto-released on pointer up");
                        }
                    }
                }
            })
        };

        let monitor = match self
            .platform
            .install_monitor(config.release_on_pointer_up, handler)
        {
            Ok(monitor) => monitor,
            Err(err) => {
                self.controller.lock().restore(snapshot);
                tracing::debug!("listener installation failed, cursor state rolled back");
                return Err(err);
            }
        };

        self.active = Some(ActiveCapture {
            monitor,
            snapshot,
            released,
        });
        tracing::info!(
            release_on_pointer_up = config.release_on_pointer_up,
            "capture session started"
        );
        Ok(DeltaStream { rx })
    }
}

impl<P: PointerPlatform> CaptureSession<P> {
    /// Shared handle to the pointer controller, for one-shot queries and
    /// commands outside any capture.
    pub fn controller(&self) -> Arc<Mutex<PointerController<P>>> {
        Arc::clone(&self.controller)
    }

    /// Whether a capture is active. A session that auto-released reports
    /// idle even before the owner's next control call.
    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.released.load(Ordering::Acquire))
    }

    /// Leave capture mode: uninstall the movement listener, then restore the
    /// cursor state captured at start. No callbacks run after this returns.
    /// Calling `stop` while idle is a no-op.
    pub fn stop(&mut self) {
        if self.teardown() {
            tracing::info!("capture session stopped");
        }
    }

    /// Stop any active capture and force the cursor back to the OS baseline.
    ///
    /// Covers host-application hot restarts that leave a stale hidden/locked
    /// cursor behind; see [`PointerController::reset`].
    pub fn reset(&mut self) {
        self.teardown();
        self.controller.lock().reset();
        tracing::info!("pointer state reset to baseline");
    }

    fn teardown(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        // Monitor first: restoration must not race with further callbacks.
        active.monitor.uninstall();
        if !active.released.load(Ordering::Acquire) {
            self.controller.lock().restore(active.snapshot);
        }
        true
    }
}

impl<P: PointerPlatform> Drop for CaptureSession<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Lazy, unbounded sequence of pointer deltas produced by an active capture.
///
/// Iteration blocks until the next qualifying input event and ends when the
/// session auto-releases or is stopped.
#[derive(Debug)]
pub struct DeltaStream {
    rx: Receiver<SessionEvent>,
}

impl DeltaStream {
    /// Non-blocking poll for the next event, for consumers that pump the
    /// stream from their own loop.
    pub fn try_next(&self) -> Option<SessionEvent> {
        self.rx.try_recv().ok()
    }
}

impl Iterator for DeltaStream {
    type Item = PointerDelta;

    fn next(&mut self) -> Option<PointerDelta> {
        match self.rx.recv() {
            Ok(SessionEvent::Delta(delta)) => Some(delta),
            Ok(SessionEvent::End) | Err(_) => None,
        }
    }
}
