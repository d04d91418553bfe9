//! Approximate equality of `f64` values and vectors.
//!
//! Shading math goes through square roots and divisions, so a surface
//! point computed from the silhouette test rarely has a length of exactly
//! the sphere radius. Comparisons of such values use a relative epsilon.

/// Trait for testing approximate equality.
///
/// Two values are approximately equal if their difference is at most
/// `rel_eps` times the magnitude of `self`, or at most `rel_eps` if the
/// magnitude is below one. NaN and infinities are never approximately
/// equal to anything.
///
/// # Examples
/// A point on the front hemisphere of a sphere of radius 300, recovered
/// from its pixel position:
/// ```
/// use phongball_core::math::{vec3, ApproxEq};
///
/// let r = 300.0_f64;
/// let (x, y) = (123.0, 45.0);
/// let z = (r * r - x * x - y * y).sqrt();
/// assert!(vec3(x, y, z).len().approx_eq(&r));
/// ```
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `E`.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = abs(self - other);
        diff <= *rel_eps * abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-9
    }
}

/// Componentwise; used by vector comparisons.
impl<const N: usize> ApproxEq<Self, f64> for [f64; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f64) -> bool {
        self.iter()
            .zip(other)
            .all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> f64 {
        <f64 as ApproxEq>::relative_epsilon()
    }
}

#[inline]
fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
/// If the given values are not approximately equal.
///
/// # Examples
/// A grid position survives a round trip through the scene frame:
/// ```
/// # use phongball_core::assert_approx_eq;
/// use phongball_core::math::{CoordSys, Grid, Vec3};
///
/// let cs = CoordSys::centered(800);
/// let p: Vec3<f64, Grid> = Vec3::new(400.1, 399.7, 0.3);
/// assert_approx_eq!(cs.to_grid(cs.vec_to_scene(p)), p);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages:
/// ```should_panic
/// # use phongball_core::assert_approx_eq;
/// let radius = 300.0;
/// assert_approx_eq!(300.001, radius, "point off the sphere by {}", 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
}
