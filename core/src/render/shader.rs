//! Fragment shaders.
//!
//! A *fragment shader* computes the color of each individual pixel, or
//! fragment, drawn to the framebuffer. Here the fragment carries the point
//! on the sphere surface hit by the pixel's ray.
//!
//! The stock shader is [`Phong`], which sums diffuse, specular and ambient
//! terms. It uses the position of the surface point as its normal vector,
//! which is only valid for spheres centered at the scene origin. An
//! off-center sphere would need `normal = pos - center` instead.

use crate::math::{float, Color3, Vec3, World};

use super::light::Light;

/// Weight of the diffuse term.
pub const DIFFUSE: f64 = 0.50;
/// Weight of the specular term.
pub const SPECULAR: f64 = 0.35;
/// Intensity of the ambient term.
pub const AMBIENT: f64 = 0.15;

/// A fragment: a surface point to be shaded, in the scene frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag {
    pub pos: Vec3<f64, World>,
}

/// Trait for fragment shaders, used to compute the color of each individual
/// pixel, or fragment, rendered.
pub trait FragmentShader {
    /// Computes the color of `frag`. Returns either `Some(color)`, or `None`
    /// if the fragment should be discarded.
    ///
    /// # Panics
    /// `shade_fragment` should never panic.
    fn shade_fragment(&self, frag: Frag) -> Option<Color3>;
}

impl<F, Out> FragmentShader for F
where
    F: Fn(Frag) -> Out,
    Out: Into<Option<Color3>>,
{
    fn shade_fragment(&self, frag: Frag) -> Option<Color3> {
        self(frag).into()
    }
}

/// Phong-style shading of a single-colored surface lit by a point light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Phong {
    pub light: Light,
    /// The viewer position.
    pub eye: Vec3<f64, World>,
    /// The base color of the surface.
    pub color: Color3,
    /// The specular exponent. Higher values give a tighter highlight.
    pub smoothness: i32,
}

/// Returns the diffuse intensity at a point with normal `normal` lit from
/// direction `to_light`, in [0, `DIFFUSE`].
///
/// Points facing away from the light get zero, as do degenerate inputs
/// whose cosine is NaN.
#[inline]
pub fn diffuse(normal: Vec3<f64, World>, to_light: Vec3<f64, World>) -> f64 {
    DIFFUSE * normal.cos_angle(&to_light).max(0.0)
}

/// Returns the specular intensity at a point with normal `normal`, where
/// `half` is the sum of the directions towards the eye and the light.
///
/// NaN from degenerate inputs is passed through.
#[inline]
pub fn specular(
    normal: Vec3<f64, World>,
    half: Vec3<f64, World>,
    smoothness: i32,
) -> f64 {
    SPECULAR * float::f64::powi(normal.cos_angle(&half), smoothness)
}

impl Phong {
    /// Returns the color of the surface point `pos`.
    ///
    /// ```text
    /// tint = color * light.color
    /// tint * diffuse + light.color * specular + tint * AMBIENT
    /// ```
    /// where `*` between colors is modulation and `+` saturates.
    pub fn shade(&self, pos: Vec3<f64, World>) -> Color3 {
        let to_light = self.light.direction_from(pos);
        let to_eye = self.eye - pos;

        let kd = diffuse(pos, to_light);
        let ks = specular(pos, to_eye + to_light, self.smoothness);

        let tint = self.color * self.light.color;
        tint * kd + self.light.color * ks + tint * AMBIENT
    }
}

impl FragmentShader for Phong {
    fn shade_fragment(&self, frag: Frag) -> Option<Color3> {
        Some(self.shade(frag.pos))
    }
}
