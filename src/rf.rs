//! Symmetric elliptic integral of the first kind, R_F.
//!
//! Duplication algorithm from Carlson, Numer. Algorithms 10 (1995): the
//! three arguments are repeatedly averaged toward their centroid, then a
//! fifth-order two-variable Taylor tail finishes the job. The near
//! cancellation of the expansion variables makes the compensated
//! primitives in `arithmetic` mandatory, not an optimization.

use num_traits::{Float, One};

use crate::arithmetic::{comp_dot, comp_horner, comp_sum, sixth_root};
use crate::constants::{rerr_ok, MAX_ITER, RF_C1, RF_C2, RF_DENOM, RF_E3E3};
use crate::machine::CarlsonFloat;
use crate::scalar::CarlsonArg;
use crate::types::Status;

/// Compute R_F(x, y, z) to relative error `rerr`.
///
/// Valid when all three arguments have good phase and at most one of them
/// is zero; two zeros are a pole (`Status::Singular`), and a good-phase
/// directed infinity gives exactly 0.
pub fn rf<T: CarlsonArg>(x: T, y: T, z: T, rerr: T::Real) -> (T, Status) {
    if !rerr_ok(rerr) {
        return (T::nan(), Status::BadTolerance);
    }

    // Order the arguments by real part; R_F is fully symmetric.
    let mut args = [x, y, z];
    args.sort_unstable_by(|a, b| {
        a.re().partial_cmp(&b.re()).unwrap_or(core::cmp::Ordering::Equal)
    });
    let [x, y, z] = args;

    if (x.is_inf() || y.is_inf() || z.is_inf()) && x.ph_good() && y.ph_good() && z.ph_good() {
        return (T::zero(), Status::Success);
    }
    if x.too_small() && y.too_small() {
        return if z.ph_good() && !z.too_small() {
            (T::huge(), Status::Singular)
        } else {
            (T::nan(), Status::BadArguments)
        };
    }
    if !x.ph_good() || !y.ph_good() || !z.ph_good() {
        return (T::nan(), Status::BadArguments);
    }

    let three = T::Real::from_f64(3.0);
    let quarter = T::Real::from_f64(0.25);

    let a0 = comp_sum(&[x, y, z]).unscale(three);
    let mut am = a0;
    let (mut xm, mut ym, mut zm) = (x, y, z);
    let mut d4 = T::Real::one();
    let mut fterm = (a0 - x)
        .modulus()
        .max((a0 - y).modulus())
        .max((a0 - z).modulus())
        / sixth_root(three * rerr);

    let mut status = Status::Success;
    let mut m = 0u32;
    while am.modulus() <= fterm {
        if m > MAX_ITER {
            status = Status::IterationLimit;
            break;
        }
        let (sx, sy, sz) = (xm.sqrt(), ym.sqrt(), zm.sqrt());
        let lam = comp_dot(&[sx, sy, sz], &[sy, sz, sx]);
        am = (am + lam).scale(quarter);
        xm = (xm + lam).scale(quarter);
        ym = (ym + lam).scale(quarter);
        zm = (zm + lam).scale(quarter);
        d4 = d4 * quarter;
        fterm = fterm * quarter;
        m += 1;
    }
    // Re-balance the centroid, then form the normalized deviations with the
    // exact constraint ex + ey + ez = 0 enforced through ez.
    let am = comp_sum(&[xm, ym, zm]).unscale(three);
    let ex = (a0 - x).scale(d4) / am;
    let ey = (a0 - y).scale(d4) / am;
    let ez = -(ex + ey);
    let e2 = comp_dot(&[ex, -ez], &[ey, ez]);
    let e3 = ex * ey * ez;
    let terms = [
        comp_horner(e2, &RF_C1),
        comp_horner(e2, &RF_C2),
        e3.scale(T::Real::from_f64(RF_E3E3)),
    ];
    let corr = comp_dot(&terms, &[T::one(), e3, e3]).unscale(T::Real::from_f64(RF_DENOM));
    ((T::one() + corr) / am.sqrt(), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    const RERR: f64 = 1.0e-12;

    fn assert_close(got: f64, expected: f64, tol: f64) {
        assert!(
            (got - expected).abs() <= tol * expected.abs(),
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn rf_carlson_battery_real() {
        // Reference values from Carlson (1995), section 3.
        let (v, status) = rf(1.0, 2.0, 0.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 1.3110287771461, 1e-11);

        let (v, status) = rf(2.0, 3.0, 4.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 0.58408284167715, 1e-11);
    }

    #[test]
    fn rf_carlson_battery_complex() {
        // R_F(i, -i, 0) = 1.8540746773014 (real).
        let i = Complex64::new(0.0, 1.0);
        let (v, status) = rf(i, -i, Complex64::new(0.0, 0.0), RERR);
        assert_eq!(status, Status::Success);
        assert!((v.re - 1.8540746773014).abs() < 1e-11);
        assert!(v.im.abs() < 1e-11);
    }

    #[test]
    fn rf_complete_first_kind_at_zero_modulus() {
        // R_F(0, 1, 1) = pi / 2.
        let (v, status) = rf(0.0, 1.0, 1.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, core::f64::consts::FRAC_PI_2, 1e-12);
    }

    #[test]
    fn rf_equal_arguments_inverse_sqrt() {
        let (v, status) = rf(9.0, 9.0, 9.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 1.0 / 3.0, 1e-13);
    }

    #[test]
    fn rf_symmetric_in_all_arguments() {
        let (base, _) = rf(0.25, 3.5, 7.0, RERR);
        for (a, b, c) in [
            (0.25, 7.0, 3.5),
            (3.5, 0.25, 7.0),
            (3.5, 7.0, 0.25),
            (7.0, 0.25, 3.5),
            (7.0, 3.5, 0.25),
        ] {
            let (v, status) = rf(a, b, c, RERR);
            assert_eq!(status, Status::Success);
            assert_close(v, base, 1e-12);
        }
    }

    #[test]
    fn rf_matches_rc_with_repeated_argument() {
        for (x, y) in [(0.0, 0.25), (2.25, 2.0), (1.0, 3.0)] {
            let (vf, sf) = rf(x, y, y, RERR);
            let (vc, sc) = crate::rc::rc(x, y, RERR);
            assert_eq!(sf, Status::Success);
            assert_eq!(sc, Status::Success);
            assert_close(vf, vc, 1e-11);
        }
    }

    #[test]
    fn rf_scale_homogeneity() {
        // R_F(kx, ky, kz) = k^(-1/2) R_F(x, y, z)
        let (v1, _) = rf(1.0, 2.0, 3.0, RERR);
        let (vk, _) = rf(100.0, 200.0, 300.0, RERR);
        assert_close(vk * 10.0, v1, 1e-11);
    }

    #[test]
    fn rf_two_zeros_is_singular() {
        let (v, status) = rf(0.0_f64, 0.0, 1.0, RERR);
        assert_eq!(status, Status::Singular);
        assert!(v.is_infinite());
    }

    #[test]
    fn rf_good_infinity_is_zero() {
        let (v, status) = rf(1.0, 2.0, f64::INFINITY, RERR);
        assert_eq!(status, Status::Success);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn rf_bad_arguments() {
        let (v, status) = rf(-1.0_f64, 2.0, 3.0, RERR);
        assert_eq!(status, Status::BadArguments);
        assert!(v.is_nan());
    }

    #[test]
    fn rf_bad_tolerance() {
        let (v, status) = rf(1.0_f64, 2.0, 3.0, 1.0);
        assert_eq!(status, Status::BadTolerance);
        assert!(v.is_nan());
    }

    #[test]
    fn rf_f32_basic() {
        let (v, status) = rf(2.0_f32, 3.0, 4.0, 1.0e-5);
        assert_eq!(status, Status::Success);
        assert!((v - 0.5840828).abs() < 1e-4);
    }
}
