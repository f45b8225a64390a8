//! The `CarlsonArg` scalar abstraction.
//!
//! Every integral routine is generic over one scalar type, either a base
//! float or `Complex` over a base float. The trait is sealed with exactly
//! those two implementing variants, so the type-dependent helpers (phase
//! test, negligibility test, the guarded arctangent-over-square-root) are
//! resolved at compile time rather than by runtime inspection.

use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::{Float, One, Zero};

use crate::arithmetic::{two_prod_f, two_sum_f};
use crate::machine::CarlsonFloat;

mod private {
    use num_complex::Complex;

    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl<R: crate::machine::CarlsonFloat> Sealed for Complex<R> {}
}

/// Scalar argument type of the Carlson integrals: a real float or a complex
/// value over one.
///
/// `Real` is the base float; for real scalars it is `Self`.
pub trait CarlsonArg:
    Copy
    + PartialEq
    + core::fmt::Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + private::Sealed
    + 'static
{
    /// Base floating type (decomplexified self).
    type Real: CarlsonFloat + CarlsonArg<Real = Self::Real>;

    fn from_real(r: Self::Real) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;
    /// Imaginary part (zero for real scalars).
    fn im(self) -> Self::Real;
    /// Magnitude, computed without intermediate overflow.
    fn modulus(self) -> Self::Real;
    /// Principal branch of the square root.
    fn sqrt(self) -> Self;

    /// Quiet NaN sentinel for fatal statuses.
    fn nan() -> Self;
    /// Positive "huge" sentinel for poles.
    fn huge() -> Self;

    /// True when any component is infinite.
    fn is_inf(self) -> bool;

    /// Good phase: principal argument strictly inside (-pi, pi), i.e. not
    /// on the negative real axis. For real scalars this is `self >= 0`.
    fn ph_good(self) -> bool;

    /// True when the magnitude is below the negligibility cutoff and the
    /// value acts as a structural zero in the domain analysis.
    fn too_small(self) -> bool;

    /// Multiply by a real factor.
    fn scale(self, k: Self::Real) -> Self;
    /// Divide by a real factor.
    fn unscale(self, k: Self::Real) -> Self;

    /// Error-free product: returns `(fl(self * rhs), err)` with
    /// `self * rhs = fl(self * rhs) + err` (componentwise for complex).
    fn two_prod(self, rhs: Self) -> (Self, Self);

    /// Guarded `atan(sqrt(t)) / sqrt(t)`.
    ///
    /// Returns exactly 1 when `t` is negligibly close to zero (the 0/0
    /// limit), and for negative real `t` switches to the hyperbolic branch
    /// `atanh(sqrt(-t)) / sqrt(-t)` instead of producing NaN. Complex
    /// scalars always use the complex arctangent with the same guard.
    fn atan_sqrt_div(self) -> Self;
}

macro_rules! impl_real_arg {
    ($t:ty) => {
        impl CarlsonArg for $t {
            type Real = $t;

            #[inline]
            fn from_real(r: Self::Real) -> Self {
                r
            }
            #[inline]
            fn re(self) -> Self::Real {
                self
            }
            #[inline]
            fn im(self) -> Self::Real {
                0.0
            }
            #[inline]
            fn modulus(self) -> Self::Real {
                self.abs()
            }
            #[inline]
            fn sqrt(self) -> Self {
                Float::sqrt(self)
            }
            #[inline]
            fn nan() -> Self {
                <$t>::NAN
            }
            #[inline]
            fn huge() -> Self {
                <$t>::INFINITY
            }
            #[inline]
            fn is_inf(self) -> bool {
                self.is_infinite()
            }
            #[inline]
            fn ph_good(self) -> bool {
                self >= 0.0
            }
            #[inline]
            fn too_small(self) -> bool {
                self.abs() < <$t as CarlsonFloat>::nearzero()
            }
            #[inline]
            fn scale(self, k: Self::Real) -> Self {
                self * k
            }
            #[inline]
            fn unscale(self, k: Self::Real) -> Self {
                self / k
            }
            #[inline]
            fn two_prod(self, rhs: Self) -> (Self, Self) {
                two_prod_f(self, rhs)
            }
            fn atan_sqrt_div(self) -> Self {
                if self.too_small() {
                    return 1.0;
                }
                if self < 0.0 {
                    let s = Float::sqrt(-self);
                    Float::atanh(s) / s
                } else {
                    let s = Float::sqrt(self);
                    Float::atan(s) / s
                }
            }
        }
    };
}

impl_real_arg!(f64);
impl_real_arg!(f32);

impl<R: CarlsonFloat + CarlsonArg<Real = R>> CarlsonArg for Complex<R> {
    type Real = R;

    #[inline]
    fn from_real(r: R) -> Self {
        Complex::new(r, R::zero())
    }
    #[inline]
    fn re(self) -> R {
        self.re
    }
    #[inline]
    fn im(self) -> R {
        self.im
    }

    /// Overflow-safe `|z|`: factor out the larger component instead of
    /// forming `re*re + im*im` directly.
    fn modulus(self) -> R {
        let u = self.re.abs();
        let v = self.im.abs();
        let s = u + v;
        if s == R::zero() {
            return R::zero();
        }
        if u > v {
            let q = v / u;
            u * Float::sqrt(R::one() + q * q)
        } else {
            let q = u / v;
            v * Float::sqrt(R::one() + q * q)
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        Complex::sqrt(self)
    }
    #[inline]
    fn nan() -> Self {
        Complex::new(<R as Float>::nan(), <R as Float>::nan())
    }
    #[inline]
    fn huge() -> Self {
        Complex::new(R::infinity(), R::zero())
    }
    #[inline]
    fn is_inf(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }
    #[inline]
    fn ph_good(self) -> bool {
        !(self.re < R::zero() && self.im == R::zero())
    }
    #[inline]
    fn too_small(self) -> bool {
        self.modulus() < R::nearzero()
    }
    #[inline]
    fn scale(self, k: R) -> Self {
        Complex::new(self.re * k, self.im * k)
    }
    #[inline]
    fn unscale(self, k: R) -> Self {
        Complex::new(self.re / k, self.im / k)
    }

    fn two_prod(self, rhs: Self) -> (Self, Self) {
        let (p1, e1) = two_prod_f(self.re, rhs.re);
        let (p2, e2) = two_prod_f(self.im, rhs.im);
        let (pre, es) = two_sum_f(p1, -p2);
        let (q1, f1) = two_prod_f(self.re, rhs.im);
        let (q2, f2) = two_prod_f(self.im, rhs.re);
        let (pim, fs) = two_sum_f(q1, q2);
        (
            Complex::new(pre, pim),
            Complex::new(e1 - e2 + es, f1 + f2 + fs),
        )
    }

    fn atan_sqrt_div(self) -> Self {
        if self.too_small() {
            return Self::one();
        }
        let s = Complex::sqrt(self);
        Complex::atan(s) / s
    }
}
