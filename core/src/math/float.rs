//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the subset the shading math needs through the `libm` crate when
//! the `std` feature is disabled. Callers write `float::f64::sqrt(x)` and
//! friends, where `float::f64` resolves to either the primitive type or the
//! `libm` module.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::acos;
    pub use libm::sqrt;

    /// Returns `x` raised to the integer power `n`.
    #[inline]
    pub fn powi(x: f64, n: i32) -> f64 {
        libm::pow(x, n as f64)
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f64;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use super::*;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::sqrt(90000.0), 300.0);
        assert!(libm::sqrt(-1.0).is_nan());

        assert_eq!(libm::acos(1.0), 0.0);
        assert!(libm::acos(1.0 + 1e-9).is_nan());

        assert_eq!(libm::powi(-0.5, 2), 0.25);
        assert_eq!(libm::powi(3.0, 0), 1.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f64::sqrt(90000.0), 300.0);
        assert!(f64::sqrt(-1.0).is_nan());

        assert_eq!(f64::acos(1.0), 0.0);
        assert!(f64::acos(1.0 + 1e-9).is_nan());

        assert_eq!(f64::powi(-0.5, 2), 0.25);
        assert_eq!(f64::powi(3.0, 0), 1.0);
    }
}
