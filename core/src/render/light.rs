//! Light sources

use crate::math::{Color3, Vec3, World};

/// A point light source radiating omnidirectionally, positioned in the
/// scene frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub pos: Vec3<f64, World>,
    pub color: Color3,
}

impl Light {
    /// Creates a new light source of the given color at `pos`.
    pub const fn new(pos: Vec3<f64, World>, color: Color3) -> Self {
        Self { pos, color }
    }

    /// Returns the (unnormalized) vector from `pt` to `self`.
    #[inline]
    pub fn direction_from(&self, pt: Vec3<f64, World>) -> Vec3<f64, World> {
        self.pos - pt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::color::WHITE;

    #[test]
    fn direction_points_towards_light() {
        let l = Light::new(Vec3::new(0.0, 0.0, 1000.0), WHITE);
        assert_eq!(
            l.direction_from(Vec3::new(0.0, 0.0, 300.0)),
            Vec3::new(0.0, 0.0, 700.0)
        );
    }
}
