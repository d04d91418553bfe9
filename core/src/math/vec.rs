//! Space-tagged three-dimensional vectors.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Index, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;
#[cfg(feature = "fp")]
use crate::math::float;
use crate::math::space::Real;

//
// Types
//

/// A generic vector type.
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
/// * `Space`: the space that `Self` is an element of. Vectors in different
///   spaces cannot be added, subtracted, or compared with each other.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, PhantomData<Space>);

/// A 3-vector with `f64` components by default.
pub type Vec3<Sc = f64, Space = Real<3>> = Vector<[Sc; 3], Space>;

/// A 3-vector with `i32` components.
pub type Vec3i<Space = Real<3>> = Vector<[i32; 3], Space>;

/// Returns a new 3-vector in the untagged real 3-space.
#[inline]
pub const fn vec3<Sc>(x: Sc, y: Sc, z: Sc) -> Vec3<Sc> {
    Vector([x, y, z], PhantomData)
}

//
// Inherent impls
//

impl<Sc, Sp> Vector<[Sc; 3], Sp> {
    /// Returns a new vector in space `Sp` with components `x`, `y`, and `z`.
    #[inline]
    pub const fn new(x: Sc, y: Sc, z: Sc) -> Self {
        Self([x, y, z], PhantomData)
    }

    /// Returns `self` with the same components but tagged with space `S`.
    ///
    /// This is an explicit escape hatch; prefer going through a
    /// [`CoordSys`][crate::math::space::CoordSys] when changing frames.
    #[inline]
    pub fn to<S>(self) -> Vector<[Sc; 3], S> {
        Vector(self.0, PhantomData)
    }

    /// Returns a vector with `f` applied to each component of `self`.
    ///
    /// Use this to make numeric conversions explicit, for example from
    /// floating-point scene coordinates to integer pixel positions.
    #[inline]
    pub fn map<T>(self, f: impl FnMut(Sc) -> T) -> Vector<[T; 3], Sp> {
        Vector(self.0.map(f), PhantomData)
    }
}

impl<Sc: Copy, Sp> Vector<[Sc; 3], Sp> {
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    #[inline]
    pub fn z(&self) -> Sc {
        self.0[2]
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> Sc
    where
        Sc: Add<Output = Sc> + Mul<Output = Sc>,
    {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        a * d + b * e + c * f
    }

    /// Returns the dot product of `self` and `other` computed in `f64`,
    /// regardless of the component type.
    #[inline]
    pub fn dot_f64(&self, other: &Self) -> f64
    where
        Sc: Into<f64>,
    {
        (0..3)
            .map(|i| {
                let (a, b): (f64, f64) = (self.0[i].into(), other.0[i].into());
                a * b
            })
            .sum()
    }
}

#[cfg(feature = "fp")]
impl<Sc: Copy + Into<f64>, Sp> Vector<[Sc; 3], Sp> {
    /// Returns the Euclidean length of `self`.
    ///
    /// # Examples
    /// ```
    /// use phongball_core::math::vec3;
    /// assert_eq!(vec3(2, 3, 6).len(), 7.0);
    /// ```
    #[inline]
    pub fn len(&self) -> f64 {
        float::f64::sqrt(self.dot_f64(self))
    }

    /// Returns the cosine of the angle between `self` and `other`.
    ///
    /// The result is NaN if either vector has zero length. It may also
    /// fall marginally outside [-1, 1] due to rounding.
    #[inline]
    pub fn cos_angle(&self, other: &Self) -> f64 {
        self.dot_f64(other) / (self.len() * other.len())
    }

    /// Returns the angle between `self` and `other`, in radians.
    ///
    /// NaN if either vector has zero length, or if rounding pushes
    /// the cosine outside the domain of `acos`.
    #[inline]
    pub fn angle(&self, other: &Self) -> f64 {
        float::f64::acos(self.cos_angle(other))
    }
}

//
// Local trait impls
//

impl<Sp> ApproxEq<Self, f64> for Vector<[f64; 3], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f64 {
        <f64 as ApproxEq>::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<Sc, Sp> Add for Vector<[Sc; 3], Sp>
where
    Sc: Copy + Add<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl<Sc, Sp> Sub for Vector<[Sc; 3], Sp>
where
    Sc: Copy + Sub<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl<Sc, Sp> Neg for Vector<[Sc; 3], Sp>
where
    Sc: Copy + Neg<Output = Sc>,
{
    type Output = Self;
    /// Returns a new vector with every component of `self` negated.
    #[inline]
    fn neg(self) -> Self {
        self.map(Sc::neg)
    }
}

impl<R, Sp> Index<usize> for Vector<R, Sp>
where
    R: Index<usize>,
{
    type Output = R::Output;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

// Manual impls to avoid bounds on `Sp`

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), PhantomData)
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Eq, Sp> Eq for Vector<R, Sp> {}

impl<R: Debug, Sp: Debug + Default> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec<{:?}>{:?}", Sp::default(), self.0)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}
