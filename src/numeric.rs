/// Numeric traits for the filter's arithmetic precision
///
/// Every filter in this crate is generic over `T: Numeric`, so the same code
/// runs in single precision on an FPU-less microcontroller and in double
/// precision on a host. Values never widen implicitly: an `f32` filter does
/// all of its arithmetic in `f32`.
use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point type usable as filter state
///
/// Implemented for `f32` and `f64`. Only the operations the filter and the
/// calibration helpers need are required, and all of them are available
/// without `std` (`sqrt` goes through `libm`).
pub trait Numeric:
    Copy
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Neg<Output = Self>
    + PartialOrd
    + Sized
    + 'static
{
    /// Convert from an `f64` literal (rounds for `f32`)
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`, used for error reporting only
    fn to_f64(self) -> f64;

    /// Zero value (convenience wrapper for Default)
    #[inline(always)]
    fn zero() -> Self {
        Self::default()
    }

    /// One value
    #[inline(always)]
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// Square root
    fn sqrt(self) -> Self;

    /// Check if value is finite
    fn is_finite(self) -> bool;
}

// ============================================================================
// f64
// ============================================================================

impl Numeric for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

// ============================================================================
// f32
// ============================================================================

impl Numeric for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}
