//! Symmetric elliptic integral of the second kind, R_G.
//!
//! Computed from R_F and R_D through the reduction
//!   2 R_G(x, y, z) = z R_F(x, y, z) - (x - z)(y - z) R_D(x, y, z) / 3
//!                    + sqrt(x) sqrt(y) / sqrt(z),
//! pivoting on the argument of largest real part so the division is safe.
//! R_G is the one member of the family that is finite everywhere on its
//! domain, so the only failure modes are bad phase and bad tolerance.

use crate::constants::rerr_ok;
use crate::machine::CarlsonFloat;
use crate::rd::rd;
use crate::rf::rf;
use crate::scalar::CarlsonArg;
use crate::types::Status;

/// Compute R_G(x, y, z) to relative error `rerr`.
pub fn rg<T: CarlsonArg>(x: T, y: T, z: T, rerr: T::Real) -> (T, Status) {
    if !rerr_ok(rerr) {
        return (T::nan(), Status::BadTolerance);
    }

    // Pivot on the largest real part; R_G is fully symmetric.
    let mut args = [x, y, z];
    args.sort_unstable_by(|a, b| {
        a.re().partial_cmp(&b.re()).unwrap_or(core::cmp::Ordering::Equal)
    });
    let [x, y, z] = args;

    if !x.ph_good() || !y.ph_good() || !z.ph_good() {
        return (T::nan(), Status::BadArguments);
    }
    if x.is_inf() || y.is_inf() || z.is_inf() {
        // R_G grows like sqrt of its largest argument.
        return (T::huge(), Status::Success);
    }
    // The real-part sort can place a pure-imaginary argument below a
    // structural zero, so the corner tests look at all three arguments
    // instead of trusting the slots.
    let (x0, y0, z0) = (x.too_small(), y.too_small(), z.too_small());
    if x0 && y0 && z0 {
        return (T::zero(), Status::Success);
    }
    // R_G(0, 0, w) = sqrt(w) / 2 whichever slot holds w.
    let half = T::Real::from_f64(0.5);
    if y0 && z0 {
        return (x.sqrt().scale(half), Status::Success);
    }
    if x0 && z0 {
        return (y.sqrt().scale(half), Status::Success);
    }
    if x0 && y0 {
        return (z.sqrt().scale(half), Status::Success);
    }
    // At most one argument is negligible now; the pivot divides the
    // reduction, so if a tie left the zero in its slot take a nonzero one.
    let (y, z) = if z.too_small() { (z, y) } else { (y, z) };

    let half_rerr = rerr.unscale(T::Real::from_f64(2.0));
    let (fv, fs) = rf(x, y, z, half_rerr);
    if fs.is_fatal() {
        return (T::nan(), fs);
    }
    let (dv, ds) = rd(x, y, z, half_rerr);
    if ds.is_fatal() {
        return (T::nan(), ds);
    }
    let third = T::Real::from_f64(3.0);
    let v = z * fv - ((x - z) * (y - z) * dv).unscale(third) + x.sqrt() * y.sqrt() / z.sqrt();
    (v.scale(half), fs.worst(ds))
}
