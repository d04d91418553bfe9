//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [colors][color], a [coordinate
//! system][space] between the pixel grid and the scene, as well as
//! utilities such as approximate equality comparisons.
//!
//! Vectors are tagged with a type that represents the *space* they're
//! embedded in, and values in different spaces cannot be mixed without
//! explicit conversion. A light position in pixel coordinates can thus not
//! be accidentally fed to the shading math, which works in the scene frame.

pub use {
    approx::ApproxEq,
    color::{rgb, Color, Color3},
    space::{CoordSys, Grid, World},
    vec::{vec3, Vec3, Vector},
};

pub mod approx;
pub mod color;
pub mod float;
pub mod space;
pub mod vec;
