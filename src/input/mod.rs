//! Pointer input model - buffer-relative press/move/release events

mod session;

pub use session::DragController;

use serde::{Deserialize, Serialize};

/// Buffer-relative integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which pointer button a press reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerButton {
    /// The painting button; any other press is ignored
    Primary,
    Secondary,
    Other,
}

/// One pointer event delivered by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum PointerEvent {
    Press {
        position: Position,
        button: PointerButton,
    },
    Move {
        position: Position,
    },
    Release {
        position: Position,
    },
}
