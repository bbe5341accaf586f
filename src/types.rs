//! Core data types shared between the pointer controller and capture
//! sessions.

use serde::{Deserialize, Serialize};

/// Relative pointer movement since the last sample.
///
/// Deltas are movement, not positions: when the cursor is locked, raw mouse
/// motion keeps accumulating here even though the visible cursor stays put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PointerDelta {
    pub const ZERO: PointerDelta = PointerDelta { dx: 0.0, dy: 0.0 };
}

/// Absolute cursor position in screen coordinates.
///
/// Origin and axis orientation follow the underlying OS convention (on
/// macOS: bottom-left origin, y grows upward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Configuration for a capture session. Immutable once the session starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureConfig {
    /// When set, a mouse-button release ends the session automatically and
    /// the delta stream terminates with [`SessionEvent::End`].
    pub release_on_pointer_up: bool,
}

/// Snapshot of the process-wide cursor state: whether pointer movement is
/// associated with the visible cursor, and whether the cursor is visible.
///
/// A capture session takes one of these at start and restores it on every
/// exit path, so nested or repeated sessions compose correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorState {
    pub associated: bool,
    pub visible: bool,
}

impl Default for CursorState {
    /// The OS baseline: movement drives the cursor, cursor visible.
    fn default() -> Self {
        Self {
            associated: true,
            visible: true,
        }
    }
}

/// An element of a capture session's output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionEvent {
    /// Relative movement sampled on a qualifying input event.
    Delta(PointerDelta),
    /// Terminal end-of-sequence signal. Sent exactly once, only when the
    /// session auto-releases on pointer up.
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_config_uses_camel_case() {
        let config: CaptureConfig = serde_json::from_str(r#"{"releaseOnPointerUp":true}"#)
            .expect("config should deserialize");
        assert!(config.release_on_pointer_up);

        let json = serde_json::to_string(&CaptureConfig::default()).unwrap();
        assert_eq!(json, r#"{"releaseOnPointerUp":false}"#);
    }

    #[test]
    fn test_missing_config_fields_default_off() {
        let config: CaptureConfig = serde_json::from_str("{}").expect("empty config is valid");
        assert!(!config.release_on_pointer_up);
    }

    #[test]
    fn test_cursor_state_baseline() {
        let state = CursorState::default();
        assert!(state.associated, "baseline cursor is associated");
        assert!(state.visible, "baseline cursor is visible");
    }
}
