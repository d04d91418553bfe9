//! Light animation.

use core::time::Duration;

use crate::math::{Grid, Vec3};

use super::scene::Scene;

/// Moves the light of a [`Scene`] by a fixed step whenever enough time has
/// passed since the last move.
///
/// The drift is unbounded: the light keeps moving in the same direction
/// for as long as ticks arrive, and eventually leaves the visible range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drift {
    /// Light displacement per move, in grid coordinates.
    pub step: Vec3<f64, Grid>,
    /// Time that must be exceeded between two moves.
    pub min_interval: Duration,
    elapsed: Duration,
}

impl Drift {
    /// Creates a drift with the given step and minimum interval.
    pub const fn new(step: Vec3<f64, Grid>, min_interval: Duration) -> Self {
        Self { step, min_interval, elapsed: Duration::ZERO }
    }

    /// Advances the animation clock by `dt`.
    ///
    /// If the time accumulated since the last move is greater than
    /// `min_interval`, moves the light of `scene` by `step`, restarts the
    /// clock, and returns `true`. Otherwise returns `false`.
    pub fn tick(&mut self, dt: Duration, scene: &mut Scene) -> bool {
        self.elapsed += dt;
        if self.elapsed <= self.min_interval {
            return false;
        }
        self.elapsed = Duration::ZERO;
        scene.set_light_position(scene.light_position() + self.step);
        true
    }
}

impl Default for Drift {
    /// Returns a drift of 15 pixels right and down every 5 µs.
    fn default() -> Self {
        Self::new(Vec3::new(15.0, 15.0, 0.0), Duration::from_micros(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{color::WHITE, CoordSys};

    fn scene() -> Scene {
        Scene::new(
            800,
            CoordSys::centered(800),
            Vec3::new(400.0, 400.0, 1000.0),
            WHITE,
            Vec3::new(400.0, 400.0, 600.0),
        )
    }

    #[test]
    fn moves_light_by_step() {
        let mut s = scene();
        let mut d = Drift::default();

        assert!(d.tick(Duration::from_millis(16), &mut s));
        assert_eq!(s.light_position(), Vec3::new(415.0, 415.0, 1000.0));

        assert!(d.tick(Duration::from_millis(16), &mut s));
        assert_eq!(s.light_position(), Vec3::new(430.0, 430.0, 1000.0));
    }

    #[test]
    fn waits_until_interval_is_exceeded() {
        let mut s = scene();
        let mut d = Drift::new(Vec3::new(1.0, 2.0, 3.0), Duration::from_millis(10));

        assert!(!d.tick(Duration::from_millis(6), &mut s));
        assert!(!d.tick(Duration::from_millis(4), &mut s));
        assert_eq!(s.light_position(), Vec3::new(400.0, 400.0, 1000.0));

        assert!(d.tick(Duration::from_millis(1), &mut s));
        assert_eq!(s.light_position(), Vec3::new(401.0, 402.0, 1003.0));

        assert!(!d.tick(Duration::from_millis(10), &mut s));
    }

    #[test]
    fn drift_is_unbounded() {
        let mut s = scene();
        let mut d = Drift::default();
        for _ in 0..1000 {
            d.tick(Duration::from_millis(1), &mut s);
        }
        assert_eq!(s.light_position(), Vec3::new(15400.0, 15400.0, 1000.0));
    }
}
