use serde::{Deserialize, Serialize};

/// Logical render-surface dimensions presented to the simulated script.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Desktop position of the simulator window, in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOffset {
    pub x: i32,
    pub y: i32,
}

impl WindowOffset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
