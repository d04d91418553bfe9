//! Tag types for the spaces vectors live in, and the coordinate system
//! mapping between the pixel grid and the scene frame.
//!
//! ```text
//!  grid (0,0)                     scene
//!      +------------> x              ^ y
//!      |                             |
//!      |      zero point  ==>        +----> x
//!      |                            /
//!      v y                         z (towards the viewer)
//! ```

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use crate::math::vec::Vector;

/// Tag type for real vector spaces (Euclidean spaces) of dimension `DIM`.
/// For example, the type `Real<3>` corresponds to ℝ³.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Real<const DIM: usize, Basis = ()>(PhantomData<Basis>);

/// The pixel grid: origin at the top-left corner of the canvas, y pointing
/// down, z pointing towards the viewer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Grid;

/// The scene frame: origin at the zero point of a [`CoordSys`], typically
/// the canvas center, y pointing up, z pointing towards the viewer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct World;

/// A coordinate system relating [`Grid`] and [`World`] coordinates.
///
/// The mapping is a translation by the zero point plus a flip of the y axis.
/// It is its own inverse up to the translation, so round trips are exact
/// for integer-valued inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordSys<Sc = f64> {
    zero: Vector<[Sc; 3], Grid>,
}

impl<Sc: Copy> CoordSys<Sc> {
    /// Returns a coordinate system whose scene origin lies at grid
    /// position `zero`.
    pub const fn new(zero: Vector<[Sc; 3], Grid>) -> Self {
        Self { zero }
    }

    /// Returns the scene origin in grid coordinates.
    pub fn zero_point(&self) -> Vector<[Sc; 3], Grid> {
        self.zero
    }
}

impl CoordSys<f64> {
    /// Returns a coordinate system centered on a square canvas of `size`
    /// pixels, with z = 0 at the canvas plane.
    ///
    /// # Examples
    /// ```
    /// use phongball_core::math::space::{CoordSys, Grid};
    /// use phongball_core::math::Vec3;
    ///
    /// let cs = CoordSys::centered(800);
    /// assert_eq!(cs.zero_point(), Vec3::<f64, Grid>::new(400.0, 400.0, 0.0));
    /// ```
    pub fn centered(size: u32) -> Self {
        let half = f64::from(size / 2);
        Self::new(Vector::new(half, half, 0.0))
    }
}

impl<Sc> CoordSys<Sc>
where
    Sc: Copy + Add<Output = Sc> + Sub<Output = Sc>,
{
    /// Maps the grid position (`x`, `y`, `z`) to the scene frame.
    #[inline]
    pub fn to_scene(&self, x: Sc, y: Sc, z: Sc) -> Vector<[Sc; 3], World> {
        let z0 = self.zero;
        Vector::new(x - z0.x(), z0.y() - y, z - z0.z())
    }

    /// Maps the grid vector `v` to the scene frame.
    #[inline]
    pub fn vec_to_scene(
        &self,
        v: Vector<[Sc; 3], Grid>,
    ) -> Vector<[Sc; 3], World> {
        self.to_scene(v.x(), v.y(), v.z())
    }

    /// Maps the scene vector `v` back to the grid. Inverse of
    /// [`vec_to_scene`][Self::vec_to_scene].
    #[inline]
    pub fn to_grid(&self, v: Vector<[Sc; 3], World>) -> Vector<[Sc; 3], Grid> {
        let z0 = self.zero;
        Vector::new(v.x() + z0.x(), z0.y() - v.y(), v.z() + z0.z())
    }
}

impl<const DIM: usize, Basis> Debug for Real<DIM, Basis>
where
    Basis: Debug + Default,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "R{}<{:?}>", DIM, Basis::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::vec::Vec3;

    type GridVec = Vec3<f64, Grid>;
    type SceneVec = Vec3<f64, World>;

    #[test]
    fn center_maps_to_origin() {
        let cs = CoordSys::centered(800);
        assert_eq!(cs.to_scene(400.0, 400.0, 0.0), SceneVec::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let cs = CoordSys::centered(800);
        assert_eq!(
            cs.to_scene(0.0, 0.0, 0.0),
            SceneVec::new(-400.0, 400.0, 0.0)
        );
        assert_eq!(
            cs.to_scene(800.0, 700.0, 25.0),
            SceneVec::new(400.0, -300.0, 25.0)
        );
    }

    #[test]
    fn to_grid_of_scene_origin_is_zero_point() {
        let cs = CoordSys::new(GridVec::new(10.0, 20.0, 30.0));
        assert_eq!(cs.to_grid(SceneVec::default()), cs.zero_point());
    }

    #[test]
    fn integer_round_trip_is_exact() {
        let cs = CoordSys::<i32>::new(Vector::new(400, 400, 0));
        for &(x, y, z) in &[(0, 0, 0), (415, 415, 1000), (-7, 812, -3)] {
            let p = Vector::new(x, y, z);
            assert_eq!(cs.to_grid(cs.vec_to_scene(p)), p);
            let q = Vector::new(x, y, z);
            assert_eq!(cs.vec_to_scene(cs.to_grid(q)), q);
        }
    }

    #[test]
    fn real_round_trip_within_tolerance() {
        let cs = CoordSys::new(GridVec::new(400.25, 399.5, -0.125));
        let p = GridVec::new(0.1, 123.456, 1e3 / 3.0);
        assert_approx_eq!(cs.to_grid(cs.vec_to_scene(p)), p);
        let q = SceneVec::new(-12.3, 0.7, 45.6);
        assert_approx_eq!(cs.vec_to_scene(cs.to_grid(q)), q);
    }

    #[test]
    fn light_start_position() {
        let cs = CoordSys::centered(800);
        let light = cs.vec_to_scene(GridVec::new(0.0, 0.0, 1000.0));
        assert_eq!(light, SceneVec::new(-400.0, 400.0, 1000.0));
    }
}
