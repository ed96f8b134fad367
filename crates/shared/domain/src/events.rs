//! Input and window events published by the platform layer.
//!
//! Key and button codes are the raw integer codes of the windowing backend;
//! the bus does not interpret them.

use serde::{Deserialize, Serialize};

/// Left mouse button code.
pub const MOUSE_BUTTON_LEFT: i32 = 0;
/// Right mouse button code.
pub const MOUSE_BUTTON_RIGHT: i32 = 1;
/// Space bar key code.
pub const KEY_SPACE: i32 = 32;
/// Escape key code.
pub const KEY_ESCAPE: i32 = 256;

/// A point in window coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPressed {
    pub key: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyReleased {
    pub key: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseMoved {
    pub position: Vec2,
}

/// A mouse button transition. `down` is `true` on press and `false` on release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseClick {
    pub button: i32,
    pub position: Vec2,
    pub down: bool,
}

/// The drawable area changed size, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowResized {
    pub width: i32,
    pub height: i32,
}
