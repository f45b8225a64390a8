//! Machine constants and the `CarlsonFloat` trait.
//!
//! The duplication algorithms and their compensated arithmetic are generic
//! over the base floating type; this trait supplies the machine constants
//! and the fused multiply-add the error-free transformations require.

use num_traits::Float;

/// Floating-point trait for Carlson integral computation.
///
/// Implemented for `f64` and `f32`. Provides machine constants and the
/// derived negligibility cutoff used by the argument classification.
pub trait CarlsonFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it truncates via `as f32`.
    /// All coefficient tables and cutoffs originate as f64 literals, so
    /// this conversion always succeeds for the supported types.
    fn from_f64(x: f64) -> Self;

    /// Negligibility cutoff: MACH_TINY / MACH_EPSILON.
    ///
    /// Magnitudes below this are treated as structural zeros by the domain
    /// classification (a quantity this small can no longer participate in
    /// the near-cancelling sums the algorithm relies on).
    fn nearzero() -> Self;

    /// Fused multiply-add: `self * a + b`, rounded once.
    ///
    /// The compensated product/Horner primitives need a true FMA to recover
    /// the rounding error of a multiplication exactly; with the `libm`
    /// feature this resolves to `libm::fma`, with `std` to the hardware
    /// instruction. Named `fma` to avoid ambiguity with [`Float::mul_add`].
    fn fma(self, a: Self, b: Self) -> Self;
}

impl CarlsonFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn nearzero() -> f64 {
        1.0020841800044864e-292
    } // MACH_TINY / MACH_EPSILON
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        Float::mul_add(self, a, b)
    }
}

// Derived constants are written at full f64 precision to document the exact
// formula results; the compiler rounds to f32 at compile time.
#[allow(clippy::excessive_precision)]
impl CarlsonFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn nearzero() -> f32 {
        9.860761315262648e-32
    } // MACH_TINY / MACH_EPSILON
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        Float::mul_add(self, a, b)
    }
}
