use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Index, Mul};

//
// Types
//

/// A generic color type, similar to [`Vector`][crate::math::vec::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
/// Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The (S)RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// Black, the background of a freshly allocated framebuffer.
pub const BLACK: Color3 = rgb(0x00, 0x00, 0x00);

/// White, the identity of [`modulate`][Color3::modulate].
pub const WHITE: Color3 = rgb(0xFF, 0xFF, 0xFF);

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns the color whose components are the low three bytes of
    /// `hex`, interpreted as `0x00_RR_GG_BB`. The high byte is ignored.
    ///
    /// # Examples
    /// ```
    /// use phongball_core::math::color::{rgb, Color3};
    /// assert_eq!(Color3::from_rgb_u32(0xFC92A8), rgb(252, 146, 168));
    /// ```
    #[inline]
    pub const fn from_rgb_u32(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        rgb(r, g, b)
    }

    /// Multiplies `self` and `other` channel by channel, treating both as
    /// normalized [0, 1] values. Uses integer arithmetic, truncating:
    /// `a * b / 255`.
    #[inline]
    pub fn modulate(self, other: Self) -> Self {
        array::from_fn(|i| {
            let prod = u16::from(self.0[i]) * u16::from(other.0[i]);
            (prod / 0xFF) as u8
        })
        .into()
    }

    /// Multiplies every channel of `self` by `intensity`.
    ///
    /// The products are truncated toward zero when converted back to
    /// channel values. Values out of range are clamped to [0, 255] and NaN
    /// becomes 0, following the semantics of float-to-int `as` casts.
    #[inline]
    pub fn scale(self, intensity: f64) -> Self {
        self.0.map(|c| (f64::from(c) * intensity) as u8).into()
    }

    /// Adds `self` and `other` channel by channel, saturating at 255.
    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        array::from_fn(|i| self.0[i].saturating_add(other.0[i])).into()
    }
}

impl<R, Sc> Color<R, Rgb>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
}

//
// Foreign trait impls
//

/// Saturating addition; see [`Color3::saturating_add`].
impl Add for Color3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

/// Modulation; see [`Color3::modulate`].
impl Mul for Color3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.modulate(rhs)
    }
}

/// Scaling by an intensity; see [`Color3::scale`].
impl Mul<f64> for Color3 {
    type Output = Self;
    #[inline]
    fn mul(self, intensity: f64) -> Self {
        self.scale(intensity)
    }
}

/// Scaling by an intensity; see [`Color3::scale`].
impl Mul<Color3> for f64 {
    type Output = Color3;
    #[inline]
    fn mul(self, color: Color3) -> Color3 {
        color.scale(self)
    }
}

impl<R: Debug, Space: Debug + Default> Debug for Color<R, Space> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>{:?}", Space::default(), self.0)
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIOLET: Color3 = rgb(102, 0, 153);
    const PINK: Color3 = rgb(252, 146, 168);

    #[test]
    fn color_components() {
        assert_eq!(rgb(0xFF, 0, 0).r(), 0xFF);
        assert_eq!(rgb(0, 0xFF, 0).g(), 0xFF);
        assert_eq!(rgb(0, 0, 0xFF).b(), 0xFF);
    }

    #[test]
    fn rgb_to_u32() {
        assert_eq!(rgb(0x11, 0x22, 0x33).to_rgb_u32(), 0x00_11_22_33);
    }

    #[test]
    fn rgb_from_u32_ignores_high_byte() {
        assert_eq!(Color3::from_rgb_u32(0xFF_66_00_99), VIOLET);
        assert_eq!(Color3::from_rgb_u32(0x11_22_33).to_rgb_u32(), 0x11_22_33);
    }

    #[test]
    fn add_saturates() {
        assert_eq!(
            rgb(200, 100, 0) + rgb(100, 100, 255),
            rgb(255, 200, 255)
        );
        assert_eq!(WHITE + WHITE, WHITE);
        assert_eq!(BLACK + PINK, PINK);
    }

    #[test]
    fn add_never_leaves_channel_range() {
        for a in (0..=255).step_by(17) {
            for b in (0..=255).step_by(15) {
                let c = rgb(a, b, a) + rgb(b, a, 255 - b);
                let sums = [a as u16 + b as u16, 255 - b as u16 + a as u16];
                assert_eq!(c.r() as u16, sums[0].min(255));
                assert_eq!(c.b() as u16, sums[1].min(255));
            }
        }
    }

    #[test]
    fn modulate_by_white_and_black() {
        for c in [VIOLET, PINK, rgb(1, 127, 254), WHITE, BLACK] {
            assert_eq!(WHITE * c, c);
            assert_eq!(BLACK * c, BLACK);
        }
    }

    #[test]
    fn modulate_truncates() {
        // 102 * 252 / 255 = 100.8; 153 * 168 / 255 = 100.8
        assert_eq!(VIOLET * PINK, rgb(100, 0, 100));
    }

    #[test]
    fn scale_truncates() {
        assert_eq!(rgb(100, 0, 201) * 0.25, rgb(25, 0, 50));
        assert_eq!(rgb(255, 10, 3) * 0.5, rgb(127, 5, 1));
    }

    #[test]
    fn scale_is_symmetric() {
        for k in [0.0, 0.15, 0.35, 0.5, 1.0, 2.5] {
            assert_eq!(PINK * k, k * PINK);
        }
    }

    #[test]
    fn scale_clamps_and_maps_nan_to_zero() {
        assert_eq!(rgb(200, 1, 0) * 2.0, rgb(255, 2, 0));
        assert_eq!(PINK * -1.0, BLACK);
        assert_eq!(PINK * f64::NAN, BLACK);
    }
}
