//! Compensated (error-tracking) arithmetic primitives.
//!
//! The duplication algorithms depend on short sums and dot products whose
//! first-order terms nearly cancel as the iteration converges; naive
//! accumulation would leave nothing but rounding noise. These helpers track
//! and correct the rounding error of each elementary add and multiply
//! (Knuth's two-sum, FMA-based two-product, and the compensated Horner
//! scheme of Graillat/Langlois/Louvet) instead of trusting the scalar
//! type's native accumulation.

use crate::machine::CarlsonFloat;
use crate::scalar::CarlsonArg;

/// Error-free sum of two base floats: `a + b = s + err` exactly.
#[inline]
pub(crate) fn two_sum_f<R: CarlsonFloat>(a: R, b: R) -> (R, R) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Error-free product of two base floats: `a * b = p + err` exactly.
#[inline]
pub(crate) fn two_prod_f<R: CarlsonFloat>(a: R, b: R) -> (R, R) {
    let p = a * b;
    let err = a.fma(b, -p);
    (p, err)
}

/// Error-free sum at the scalar level (componentwise for complex).
#[inline]
pub(crate) fn two_sum<T: CarlsonArg>(a: T, b: T) -> (T, T) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Compensated sum of a short sequence of scalars.
pub(crate) fn comp_sum<T: CarlsonArg>(terms: &[T]) -> T {
    let mut s = T::zero();
    let mut e = T::zero();
    for &t in terms {
        let (snew, err) = two_sum(s, t);
        s = snew;
        e = e + err;
    }
    s + e
}

/// Compensated dot product of two equal-length short sequences.
pub(crate) fn comp_dot<T: CarlsonArg>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let mut s = T::zero();
    let mut e = T::zero();
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        let (p, ep) = ai.two_prod(bi);
        let (snew, es) = two_sum(s, p);
        s = snew;
        e = e + (ep + es);
    }
    s + e
}

/// Compensated Horner evaluation of a polynomial at `x`.
///
/// `coeffs` holds the coefficients in ascending order of degree, tabulated
/// as exact-integer f64 literals; the rounding error of every multiply and
/// add is accumulated in a parallel correction term.
pub(crate) fn comp_horner<T: CarlsonArg>(x: T, coeffs: &[f64]) -> T {
    let n = coeffs.len();
    let mut s = T::from_real(T::Real::from_f64(coeffs[n - 1]));
    let mut e = T::zero();
    for &c in coeffs[..n - 1].iter().rev() {
        let (p, ep) = s.two_prod(x);
        let (snew, es) = two_sum(p, T::from_real(T::Real::from_f64(c)));
        s = snew;
        e = e * x + (ep + es);
    }
    s + e
}

/// Sixth root, used by the duplication stopping criteria.
#[inline]
pub(crate) fn sixth_root<R: CarlsonFloat>(x: R) -> R {
    x.cbrt().sqrt()
}

/// Eighth root, used by the degenerate-case stopping criterion.
#[inline]
pub(crate) fn eighth_root<R: CarlsonFloat>(x: R) -> R {
    x.sqrt().sqrt().sqrt()
}
