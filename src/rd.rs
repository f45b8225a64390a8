//! Degenerate symmetric elliptic integral of the third kind, R_D.
//!
//! R_D(x, y, z) = R_J(x, y, z, z); it shares the R_{-3/2} Taylor tail (and
//! coefficient tables) with `rj` but needs no pole bookkeeping, only an
//! accumulated z-channel tail. Symmetric in x and y; z is the repeated
//! argument. Algorithm from Carlson, Numer. Algorithms 10 (1995).

use num_traits::{Float, One};

use crate::arithmetic::{comp_dot, comp_horner, comp_sum, sixth_root};
use crate::constants::{
    rerr_ok, MAX_ITER, RDJ_C1, RDJ_C2, RDJ_C3, RDJ_C4, RDJ_C5, RDJ_DENOM,
};
use crate::machine::CarlsonFloat;
use crate::scalar::CarlsonArg;
use crate::types::Status;

/// Compute R_D(x, y, z) to relative error `rerr`.
///
/// Valid when all arguments have good phase, at most one of x, y is zero,
/// and z is nonzero; `z ~ 0` or `x ~ y ~ 0` are poles (`Status::Singular`).
pub fn rd<T: CarlsonArg>(x: T, y: T, z: T, rerr: T::Real) -> (T, Status) {
    if !rerr_ok(rerr) {
        return (T::nan(), Status::BadTolerance);
    }

    // Symmetric pair in order of real parts.
    let (x, y) = if x.re() > y.re() { (y, x) } else { (x, y) };

    if (x.is_inf() || y.is_inf() || z.is_inf()) && x.ph_good() && y.ph_good() && z.ph_good() {
        return (T::zero(), Status::Success);
    }
    let xy0 = x.too_small() && y.too_small();
    if (z.too_small() || xy0) && x.ph_good() && y.ph_good() && z.ph_good() {
        return if z.too_small() && xy0 {
            (T::nan(), Status::BadArguments)
        } else {
            (T::huge(), Status::Singular)
        };
    }
    if !x.ph_good() || !y.ph_good() || !z.ph_good() {
        return (T::nan(), Status::BadArguments);
    }

    let three = T::Real::from_f64(3.0);
    let five = T::Real::from_f64(5.0);
    let quarter = T::Real::from_f64(0.25);

    let a0 = comp_sum(&[x, y, z, z, z]).unscale(five);
    let mut am = a0;
    let (mut xm, mut ym, mut zm) = (x, y, z);
    let mut d4 = T::Real::one();
    let mut fterm = (a0 - x)
        .modulus()
        .max((a0 - y).modulus())
        .max((a0 - z).modulus())
        / sixth_root(rerr / five);
    let mut tail = T::zero();

    let mut status = Status::Success;
    let mut m = 0u32;
    while am.modulus() <= fterm {
        if m > MAX_ITER {
            status = Status::IterationLimit;
            break;
        }
        let (sx, sy, sz) = (xm.sqrt(), ym.sqrt(), zm.sqrt());
        let lam = comp_dot(&[sx, sy, sz], &[sy, sz, sx]);
        // z-channel contribution of this duplication step.
        tail = tail + T::from_real(d4) / (sz * (zm + lam));
        am = (am + lam).scale(quarter);
        xm = (xm + lam).scale(quarter);
        ym = (ym + lam).scale(quarter);
        zm = (zm + lam).scale(quarter);
        d4 = d4 * quarter;
        fterm = fterm * quarter;
        m += 1;
    }
    let am = comp_sum(&[xm, ym, zm, zm, zm]).unscale(five);
    let ex = (a0 - x).scale(d4) / am;
    let ey = (a0 - y).scale(d4) / am;
    let ez = -(ex + ey).unscale(three);
    let ez2 = ez * ez;
    let exy = ex * ey;
    let e2 = comp_dot(&[ex, ez.scale(-T::Real::from_f64(6.0))], &[ey, ez]);
    let e3 = (exy.scale(three) - ez2.scale(T::Real::from_f64(8.0))) * ez;
    let e4 = (exy - ez2).scale(three) * ez2;
    let e5 = exy * ez2 * ez;
    let terms = [
        comp_horner(e2, &RDJ_C1),
        comp_horner(e3, &RDJ_C2),
        comp_horner(e2, &RDJ_C3),
        comp_horner(e2, &RDJ_C4),
        comp_horner(e2, &RDJ_C5),
        e3.scale(T::Real::from_f64(RDJ_C5[1])),
    ];
    let weights = [T::one(), T::one(), e3, e4, e5, e4];
    let corr =
        comp_dot(&terms, &weights).unscale(T::Real::from_f64(RDJ_DENOM)) + T::one();
    let t = am.sqrt();
    let v = corr.scale(d4) / (t * t * t) + tail.scale(three);
    (v, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rj::rj;
    use num_complex::Complex64;

    const RERR: f64 = 1.0e-12;

    fn assert_close(got: f64, expected: f64, tol: f64) {
        assert!(
            (got - expected).abs() <= tol * expected.abs(),
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn rd_carlson_battery_real() {
        let (v, status) = rd(0.0, 2.0, 1.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 1.7972103521034, 1e-11);

        let (v, status) = rd(2.0, 3.0, 4.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 0.16510527294261, 1e-11);
    }

    #[test]
    fn rd_carlson_battery_complex() {
        // R_D(i, -i, 2) = 0.65933854154220 (real).
        let i = Complex64::new(0.0, 1.0);
        let (v, status) = rd(i, -i, Complex64::new(2.0, 0.0), RERR);
        assert_eq!(status, Status::Success);
        assert!((v.re - 0.65933854154220).abs() < 1e-11);
        assert!(v.im.abs() < 1e-11);
    }

    #[test]
    fn rd_equal_arguments_closed_form() {
        // R_D(a, a, a) = a^(-3/2)
        let (v, status) = rd(4.0, 4.0, 4.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 0.125, 1e-13);
    }

    #[test]
    fn rd_symmetric_in_first_pair() {
        let (a, _) = rd(0.5, 3.0, 2.0, RERR);
        let (b, _) = rd(3.0, 0.5, 2.0, RERR);
        assert_close(a, b, 1e-12);
    }

    #[test]
    fn rd_matches_rj_with_repeated_argument() {
        for (x, y, z) in [(1.0, 2.0, 3.0), (0.1, 5.0, 2.0), (0.0, 2.0, 1.0)] {
            let (vd, sd) = rd(x, y, z, RERR);
            let (vj, sj) = rj(x, y, z, z, RERR);
            assert_eq!(sd, Status::Success);
            assert_eq!(sj, Status::Success);
            assert_close(vd, vj, 1e-10);
        }
    }

    #[test]
    fn rd_scale_homogeneity() {
        // R_D(kx, ky, kz) = k^(-3/2) R_D(x, y, z)
        let (v1, _) = rd(1.0, 2.0, 3.0, RERR);
        let (vk, _) = rd(4.0, 8.0, 12.0, RERR);
        assert_close(vk * 8.0, v1, 1e-11);
    }

    #[test]
    fn rd_poles() {
        let (v, status) = rd(1.0_f64, 2.0, 0.0, RERR);
        assert_eq!(status, Status::Singular);
        assert!(v.is_infinite());

        let (v, status) = rd(0.0_f64, 0.0, 1.0, RERR);
        assert_eq!(status, Status::Singular);
        assert!(v.is_infinite());
    }

    #[test]
    fn rd_bad_arguments() {
        let (v, status) = rd(-1.0_f64, 2.0, 3.0, RERR);
        assert_eq!(status, Status::BadArguments);
        assert!(v.is_nan());
    }
}
