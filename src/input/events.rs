use crate::core::geo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Pointer and container events fed to the interaction controller.
///
/// Positions are device pixels relative to the canvas origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown { position: Point },
    /// Pointer moved, pressed or not
    PointerMove { position: Point },
    /// Primary button released
    PointerUp { position: Point },
    /// Pointer left the canvas
    PointerLeave,
    /// Click delivered after a down/up pair
    Click { position: Point },
    /// Wheel tick; positive `delta_y` scrolls away from the user (zoom out)
    Wheel { delta_y: f64, position: Point },
    /// Canvas/container resize
    Resize { size: Size },
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

/// What the host should do after an event was processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResponse {
    pub handled: EventHandled,
    /// The host must cancel the platform default (page scroll on wheel)
    pub prevent_default: bool,
    /// View state changed; request a render
    pub needs_render: bool,
}

impl InputResponse {
    pub fn ignored() -> Self {
        Self {
            handled: EventHandled::NotHandled,
            prevent_default: false,
            needs_render: false,
        }
    }

    pub fn handled(needs_render: bool) -> Self {
        Self {
            handled: EventHandled::Handled,
            prevent_default: false,
            needs_render,
        }
    }

    pub fn with_prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

/// Messages emitted by the map to its collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A click resolved to a marker
    MarkerSelected { id: String },
    /// Pan or zoom changed
    ViewChanged { pan: Point, zoom: f64 },
}
