//! Frontends for presenting `phongball` frames on screen.

use std::time::Duration;

#[cfg(feature = "minifb")]
pub mod minifb;

/// Width and height of a window, in pixels.
pub type Dims = (u32, u32);

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Reference to the window object.
    pub win: &'a mut Win,
}
