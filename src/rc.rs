//! Degenerate symmetric elliptic integral R_C.
//!
//! R_C(x, y) = R_F(x, y, y) is the degenerate case every other routine
//! reduces to; the principal-value and asymptotic branches of `rj` lean on
//! it heavily. Algorithm from Carlson, Numer. Algorithms 10 (1995), with
//! the Cauchy principal value for real negative `y` via the
//! `sqrt(x/(x-y)) * R_C(x-y, -y)` transform (DLMF 19.2.20).

use num_traits::{One, Zero};

use crate::arithmetic::{comp_horner, comp_sum, eighth_root};
use crate::constants::{rerr_ok, MAX_ITER, RC_C, RC_DENOM};
use crate::machine::CarlsonFloat;
use crate::scalar::CarlsonArg;
use crate::types::Status;

/// Compute R_C(x, y) to relative error `rerr`.
///
/// Valid for `x` with good phase and nonzero `y` with good phase; real
/// negative `y` is recovered as a Cauchy principal value. `y ~ 0` is a pole
/// (`Status::Singular`), and a good-phase directed infinity gives exactly 0.
pub fn rc<T: CarlsonArg>(x: T, y: T, rerr: T::Real) -> (T, Status) {
    let zero = T::Real::zero();
    if !rerr_ok(rerr) {
        return (T::nan(), Status::BadTolerance);
    }

    if (x.is_inf() || y.is_inf()) && x.ph_good() && y.ph_good() {
        return (T::zero(), Status::Success);
    }
    if y.too_small() {
        // The integrand loses its 1/(t + y) damping at t = 0.
        return if !x.too_small() && x.ph_good() {
            (T::huge(), Status::Singular)
        } else {
            (T::nan(), Status::BadArguments)
        };
    }
    if y.im().too_small() && y.re() < zero {
        // Cauchy principal value, valid for real nonnegative x.
        if !(x.im().too_small() && x.re() >= zero) {
            return (T::nan(), Status::BadArguments);
        }
        let (v, status) = rc(x - y, -y, rerr);
        if status.is_fatal() {
            return (T::nan(), status);
        }
        return ((x / (x - y)).sqrt() * v, status);
    }
    if !x.ph_good() || !y.ph_good() {
        return (T::nan(), Status::BadArguments);
    }

    let two = T::Real::from_f64(2.0);
    let three = T::Real::from_f64(3.0);
    let quarter = T::Real::from_f64(0.25);

    let a0 = comp_sum(&[x, y, y]).unscale(three);
    let mut am = a0;
    let mut xm = x;
    let mut ym = y;
    let mut d4 = T::Real::one();
    let mut fterm = (a0 - x).modulus() / eighth_root(three * rerr);

    let mut status = Status::Success;
    let mut m = 0u32;
    while am.modulus() <= fterm {
        if m > MAX_ITER {
            status = Status::IterationLimit;
            break;
        }
        let lam = xm.sqrt() * ym.sqrt().scale(two) + ym;
        am = (am + lam).scale(quarter);
        xm = (xm + lam).scale(quarter);
        ym = (ym + lam).scale(quarter);
        d4 = d4 * quarter;
        fterm = fterm * quarter;
        m += 1;
    }
    // Re-balance the centroid before forming the expansion variable.
    let am = comp_sum(&[xm, ym, ym]).unscale(three);
    let s = (y - a0).scale(d4) / am;
    let tail = comp_horner(s, &RC_C).unscale(T::Real::from_f64(RC_DENOM));
    ((T::one() + tail) / am.sqrt(), status)
}
