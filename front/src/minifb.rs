//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{debug, info};
use minifb::{Key, WindowOptions};

use phongball_core::math::Color3;
use phongball_core::util::buf::AsSlice2;

use crate::{Dims, Frame};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
    // Scratch buffer for pixels in 0x00RRGGBB format.
    pixels: Vec<u32>,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: (800, 800),
            title: "phongball",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let (w, h) = (dims.0 as usize, dims.1 as usize);
        let mut imp = minifb::Window::new(title, w, h, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        debug!("opened {w}x{h} window \"{title}\"");
        Ok(Window { imp, dims, pixels: Vec::with_capacity(w * h) })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with the colors in `img`, and processes
    /// pending window events.
    ///
    /// # Errors
    /// If `minifb` fails to update the window, for example because the
    /// image is smaller than the window.
    pub fn present(&mut self, img: impl AsSlice2<Color3>) -> minifb::Result<()> {
        let img = img.as_slice2();
        self.pixels.clear();
        self.pixels.extend(img.iter().map(|c| c.to_rgb_u32()));
        self.imp
            .update_with_buffer(&self.pixels, img.width(), img.height())
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and present the next frame.
    ///
    /// Window events are only processed when the callback calls
    /// [`present`][Self::present].
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// Returns the value the callback broke with, or `None` if the loop was
    /// ended by the user.
    pub fn run<B, F>(&mut self, mut frame_fn: F) -> Option<B>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<B>,
    {
        let start = Instant::now();
        let mut last = Instant::now();
        let mut frames = 0u64;
        let res = loop {
            if self.should_quit() {
                break None;
            }
            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                win: self,
            };
            last = Instant::now();
            if let Break(b) = frame_fn(frame) {
                break Some(b);
            }
            frames += 1;
        };
        info!("window closed after {frames} frames in {:?}", start.elapsed());
        res
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
