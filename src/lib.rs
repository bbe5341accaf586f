//! Pointer lock and capture sessions for desktop applications.
//!
//! Two collaborating pieces:
//!
//! - [`PointerController`] — façade over the OS pointer primitives: lock or
//!   unlock the cursor-to-movement association, hide or show the cursor, read
//!   the accumulated raw mouse delta (destructive), read the absolute cursor
//!   position.
//! - [`CaptureSession`] — stateful manager for "locked & hidden cursor,
//!   delta-streaming" mode. At most one capture is active per session object;
//!   starting locks and hides the cursor and streams [`PointerDelta`] values
//!   for every move or drag until the session is stopped, dropped, or —
//!   with [`CaptureConfig::release_on_pointer_up`] — a mouse button is
//!   released. The cursor state from before the capture is restored on every
//!   exit path.
//!
//! ```no_run
//! use pointer_capture::{CaptureConfig, CaptureSession};
//!
//! # fn main() -> Result<(), pointer_capture::CaptureError> {
//! let mut session = CaptureSession::native()?;
//! let stream = session.start(CaptureConfig {
//!     release_on_pointer_up: true,
//! })?;
//! for delta in stream {
//!     println!("moved by {}, {}", delta.dx, delta.dy);
//! }
//! // Stream ended: the button was released and the cursor is restored.
//! # Ok(())
//! # }
//! ```
//!
//! Only macOS has a native backend; [`platform::native`] fails with
//! [`CaptureError::UnsupportedPlatform`] elsewhere. The library never
//! installs a logging subscriber; it emits `tracing` events for the host to
//! collect.

pub mod controller;
pub mod error;
pub mod platform;
pub mod session;
pub mod types;

pub use controller::PointerController;
pub use error::{CaptureError, CaptureResult};
pub use platform::{native, MonitorHandle, NativePlatform, PointerEvent, PointerPlatform};
pub use session::{CaptureSession, DeltaStream};
pub use types::{CaptureConfig, CursorState, PointerDelta, ScreenPoint, SessionEvent};
