//! Core functionality of the `phongball` project.
//!
//! Includes a small math library with space-tagged vectors, byte colors and
//! a grid-to-scene coordinate system; a 2D buffer type with PPM output; and
//! a single-sphere scene with a Phong-style per-pixel shading kernel.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O, timekeeping, or any floating-point
//!   functions not included in `core`. In particular this means square roots,
//!   inverse cosines and powers needed by the shading kernel.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! The `std` feature is enabled by default.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod math;
#[cfg(feature = "fp")]
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        color::{rgb, Color3, BLACK, WHITE},
        space::{CoordSys, Grid, World},
        vec::{vec3, Vec3, Vector},
    };

    #[cfg(feature = "fp")]
    pub use crate::render::{anim::Drift, scene::Scene, stats::Stats};

    pub use crate::util::buf::Buf2;
}
