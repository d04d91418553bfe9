//! A single-sphere scene and its shading kernel.

use log::trace;

use crate::math::{
    float, ApproxEq, Color3, CoordSys, Grid, Vec3, World,
};
use crate::util::buf::{Buf2, Slice2};

use super::light::Light;
use super::shader::{Frag, FragmentShader, Phong};
use super::stats::Stats;

/// The default specular exponent.
pub const DEFAULT_SMOOTHNESS: i32 = 20;

/// A square canvas showing a single sphere centered at the scene origin,
/// lit by a single point light.
///
/// Light and eye positions are accepted and returned in [`Grid`]
/// coordinates, and stored in the [`World`] frame defined by the
/// coordinate system.
#[derive(Clone, Debug)]
pub struct Scene {
    coord_sys: CoordSys,
    light: Light,
    eye: Vec3<f64, World>,
    smoothness: i32,
    ball_color: Color3,
    buf: Buf2<Color3>,
    stats: Stats,
}

impl Scene {
    /// Creates a scene with a black `size`×`size` framebuffer.
    pub fn new(
        size: u32,
        coord_sys: CoordSys,
        light_pos: Vec3<f64, Grid>,
        light_color: Color3,
        eye_pos: Vec3<f64, Grid>,
    ) -> Self {
        let size = size as usize;
        Self {
            coord_sys,
            light: Light::new(coord_sys.vec_to_scene(light_pos), light_color),
            eye: coord_sys.vec_to_scene(eye_pos),
            smoothness: DEFAULT_SMOOTHNESS,
            ball_color: Color3::default(),
            buf: Buf2::new_default(size, size),
            stats: Stats::new(),
        }
    }

    /// Sets the specular exponent.
    pub fn with_smoothness(self, smoothness: i32) -> Self {
        Self { smoothness, ..self }
    }

    /// Moves the light to grid position `pos`.
    pub fn set_light_position(&mut self, pos: Vec3<f64, Grid>) {
        self.light.pos = self.coord_sys.vec_to_scene(pos);
    }

    /// Returns the light position in grid coordinates.
    pub fn light_position(&self) -> Vec3<f64, Grid> {
        self.coord_sys.to_grid(self.light.pos)
    }

    pub fn light_color(&self) -> Color3 {
        self.light.color
    }

    /// Returns the eye position in grid coordinates.
    pub fn eye_position(&self) -> Vec3<f64, Grid> {
        self.coord_sys.to_grid(self.eye)
    }

    pub fn smoothness(&self) -> i32 {
        self.smoothness
    }

    /// Returns the color the sphere was last rendered with.
    pub fn ball_color(&self) -> Color3 {
        self.ball_color
    }

    /// Returns the width (and height) of the canvas in pixels.
    pub fn size(&self) -> usize {
        self.buf.width()
    }

    pub fn coord_sys(&self) -> &CoordSys {
        &self.coord_sys
    }

    /// Returns the framebuffer as last rendered.
    pub fn framebuffer(&self) -> Slice2<'_, Color3> {
        self.buf.as_slice2()
    }

    /// Returns the statistics accumulated over all frames rendered so far.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Renders a sphere of `radius` and base `color` centered at the scene
    /// origin, viewed straight along the z axis.
    ///
    /// Each pixel whose distance `d` from the origin in the xy plane is at
    /// most `radius` is overwritten with the shaded color of the point on
    /// the front hemisphere, at depth `sqrt(radius² - d²)`. All other pixels
    /// keep their current value. A negative radius renders nothing.
    pub fn render_sphere(&mut self, radius: f64, color: Color3) {
        self.ball_color = color;
        let shader = Phong {
            light: self.light,
            eye: self.eye,
            color,
            smoothness: self.smoothness,
        };
        let mut stats = Stats::start();
        let r_sq = radius * radius;

        for y in 0..self.buf.height() {
            for x in 0..self.buf.width() {
                stats.pixels.i += 1;

                let pt = self.coord_sys.to_scene(x as f64, y as f64, 0.0);
                let d_sq = pt.x() * pt.x() + pt.y() * pt.y();
                if d_sq > r_sq {
                    continue;
                }
                let z = float::f64::sqrt(r_sq - d_sq);
                let pos = Vec3::new(pt.x(), pt.y(), z);

                // Rounding may push an edge point slightly past the radius
                let len = pos.len();
                if !(len <= radius || len.approx_eq(&radius)) {
                    continue;
                }
                if let Some(c) = shader.shade_fragment(Frag { pos }) {
                    self.buf[[x, y]] = c;
                    stats.pixels.o += 1;
                }
            }
        }
        stats.frames = 1.0;
        let stats = stats.finish();
        trace!(
            "sphere r={radius} pixels tested={} shaded={} in {:?}",
            stats.pixels.i, stats.pixels.o, stats.time
        );
        self.stats += stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::color::{rgb, BLACK, WHITE};

    const VIOLET: Color3 = rgb(0x66, 0x00, 0x99);
    const PINK: Color3 = rgb(0xFC, 0x92, 0xA8);

    fn grid(x: f64, y: f64, z: f64) -> Vec3<f64, Grid> {
        Vec3::new(x, y, z)
    }

    fn scene(size: u32) -> Scene {
        Scene::new(
            size,
            CoordSys::centered(size),
            grid(0.0, 0.0, 1000.0),
            PINK,
            grid(400.0, 400.0, 600.0),
        )
    }

    #[test]
    fn new_scene_is_black() {
        let s = scene(16);
        assert_eq!(s.size(), 16);
        assert!(s.framebuffer().iter().all(|c| *c == BLACK));
    }

    #[test]
    fn positions_round_trip_through_scene_frame() {
        let s = scene(800);
        assert_eq!(s.light_position(), grid(0.0, 0.0, 1000.0));
        assert_eq!(s.eye_position(), grid(400.0, 400.0, 600.0));
    }

    #[test]
    fn set_light_position_round_trip() {
        let mut s = scene(800);
        s.set_light_position(grid(415.0, 415.0, 1000.0));
        assert_eq!(s.light_position(), grid(415.0, 415.0, 1000.0));
    }

    #[test]
    fn center_is_shaded_and_corner_is_not() {
        let mut s = scene(800);
        s.render_sphere(300.0, VIOLET);

        let fb = s.framebuffer();
        assert_ne!(fb[[400, 400]], BLACK);
        assert_eq!(fb[[0, 0]], BLACK);
        assert_eq!(fb[[799, 799]], BLACK);
        assert_eq!(s.ball_color(), VIOLET);
    }

    #[test]
    fn equator_is_included() {
        let mut s = scene(800);
        s.render_sphere(300.0, VIOLET);

        let fb = s.framebuffer();
        // d == r exactly
        for [x, y] in [[700usize, 400], [100, 400], [400, 100], [400, 700]] {
            assert_ne!(fb[[x, y]], BLACK, "pixel ({x}, {y})");
        }
        // d == r + 1
        for [x, y] in [[701usize, 400], [99, 400], [400, 99], [400, 701]] {
            assert_eq!(fb[[x, y]], BLACK, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn shaded_iff_inside_silhouette() {
        let mut s = scene(64);
        s.render_sphere(20.0, WHITE);

        let fb = s.framebuffer();
        for y in 0..64usize {
            for x in 0..64usize {
                let (dx, dy) = (x as f64 - 32.0, y as f64 - 32.0);
                let inside = dx * dx + dy * dy <= 400.0;
                assert_eq!(fb[[x, y]] != BLACK, inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn pixels_outside_are_left_unmodified() {
        let mut s = scene(64);
        s.render_sphere(30.0, WHITE);
        let before = s.framebuffer()[[32, 5]];
        assert_ne!(before, BLACK);

        s.render_sphere(10.0, VIOLET);
        assert_eq!(s.framebuffer()[[32, 5]], before);
        assert_ne!(s.framebuffer()[[32, 32]], before);
    }

    #[test]
    fn negative_radius_renders_nothing() {
        let mut s = scene(32);
        s.render_sphere(-10.0, WHITE);
        assert!(s.framebuffer().iter().all(|c| *c == BLACK));
    }

    #[test]
    fn stats_count_tested_and_shaded_pixels() {
        let mut s = scene(64);
        s.render_sphere(20.0, WHITE);
        s.render_sphere(20.0, WHITE);

        let shaded = s.framebuffer().iter().filter(|c| **c != BLACK).count();
        let st = s.stats();
        assert_eq!(st.frames, 2.0);
        assert_eq!(st.pixels.i, 2 * 64 * 64);
        assert_eq!(st.pixels.o, 2 * shaded);
    }

    #[test]
    fn smoothness_changes_highlight() {
        let mut dull = scene(64).with_smoothness(1);
        let mut sharp = scene(64).with_smoothness(50);
        assert_eq!(sharp.smoothness(), 50);

        dull.render_sphere(20.0, VIOLET);
        sharp.render_sphere(20.0, VIOLET);
        assert_ne!(dull.framebuffer().data(), sharp.framebuffer().data());
    }
}
