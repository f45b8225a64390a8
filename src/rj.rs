//! Symmetric elliptic integral of the third kind, R_J.
//!
//! This is the hardest member of the family: on top of the duplication
//! iteration (Carlson, Numer. Algorithms 10 (1995)) it needs a domain
//! classification over the complex plane, a Cauchy principal value branch
//! for a negative fourth argument, and a set of asymptotic shortcuts for
//! argument magnitudes so lopsided that the iteration would either lose
//! accuracy or burn its entire budget contracting them (Carlson & Gustafson,
//! SIAM J. Math. Anal. 25 (1994), for the asymptotic bounds).
//!
//! The symmetric triple (x, y, z) is always reduced to ascending order of
//! real parts first; every predicate below relies on that ordering.

use num_traits::{Float, One, Zero};

use crate::arithmetic::{comp_dot, comp_horner, comp_sum, sixth_root};
use crate::constants::{
    rerr_ok, ASYM_CLOSE_UL, ASYM_ZERO_UL, MAX_ITER, RDJ_C1, RDJ_C2, RDJ_C3, RDJ_C4, RDJ_C5,
    RDJ_DENOM,
};
use crate::machine::CarlsonFloat;
use crate::rc::rc;
use crate::rf::rf;
use crate::rg::rg;
use crate::scalar::CarlsonArg;
use crate::types::Status;

/// `r` is negligible as a ratio: in (0, ASYM_ZERO_UL].
#[inline]
fn asymp_zero<R: CarlsonFloat>(r: R) -> bool {
    r > R::zero() && r <= R::from_f64(ASYM_ZERO_UL)
}

/// `r` is negligible in absolute terms: in (0, ASYM_CLOSE_UL].
#[inline]
fn abs_close_zero<R: CarlsonFloat>(r: R) -> bool {
    r > R::zero() && r <= R::from_f64(ASYM_CLOSE_UL)
}

/// Domain classification of one (x, y, z, p) quadruple.
#[derive(Debug, Default, Clone, Copy)]
struct ArgCases {
    /// Real nonnegative arguments with p > 0; asymptotic shortcuts apply.
    maybe_asymp: bool,
    /// Real nonnegative arguments with p < 0; retry as a principal value.
    retry_caupv: bool,
    /// A directed infinity on which the integral converges to exactly 0.
    good_infinity: bool,
    /// A true pole: two of the symmetric arguments vanish.
    hit_pole: bool,
}

/// One of (a, b) and its partner form a strictly nonreal conjugate pair and
/// `c` is real and nonnegative. With the three rotations of the symmetric
/// triple this covers every admissible pair choice.
fn conj_pair_real_third<T: CarlsonArg>(a: T, b: T, c: T) -> bool {
    a.re() == b.re()
        && a.im() == -b.im()
        && a.im() != T::Real::zero()
        && c.im().too_small()
        && c.re() >= T::Real::zero()
}

/// Carlson's admissibility conditions for R_J, with the recoverable cases
/// reported through `ArgCases`. Requires x, y, z sorted by real part.
///
/// Returns true iff the quadruple can go straight to the duplication
/// iteration (possibly after an asymptotic shortcut).
fn classify<T: CarlsonArg>(x: T, y: T, z: T, p: T) -> (bool, ArgCases) {
    let mut cases = ArgCases::default();
    let zero = T::Real::zero();

    cases.hit_pole = x.too_small() && y.too_small() && z.ph_good() && !p.too_small();
    if cases.hit_pole {
        return (false, cases);
    }
    cases.good_infinity = (x.is_inf() || y.is_inf() || z.is_inf() || p.is_inf())
        && x.ph_good()
        && y.ph_good()
        && z.ph_good();
    if cases.good_infinity {
        return (false, cases);
    }

    // Real nonnegative triple with at most one zero (x is the smallest).
    let xyz_real_nonneg = x.im().too_small()
        && y.im().too_small()
        && z.im().too_small()
        && x.re() >= zero
        && y.re() > zero;
    if p.im().too_small() && xyz_real_nonneg {
        if p.re() < zero {
            cases.retry_caupv = true;
            return (false, cases);
        }
        if p.re() > zero {
            cases.maybe_asymp = true;
            return (true, cases);
        }
    }

    // Nonnegative real parts, at most one structural zero among x, y, z,
    // and Re p > 0.
    let (x0, y0, z0) = (x.too_small(), y.too_small(), z.too_small());
    if p.re() > zero && x.re() >= zero && !((y0 && (x0 || z0)) || (x0 && z0)) {
        return (true, cases);
    }

    // p nonzero with good phase, and exactly one of: real nonnegative
    // triple, or a nonreal conjugate pair with a real nonnegative third.
    // The two legs are disjoint by the strict-nonreality requirement, so
    // the exclusive-or is a genuine either.
    if !p.too_small() && p.ph_good() {
        let straight = xyz_real_nonneg;
        let paired = conj_pair_real_third(x, y, z)
            || conj_pair_real_third(y, z, x)
            || conj_pair_real_third(z, x, y);
        return (straight != paired, cases);
    }
    (false, cases)
}

/// Asymptotic regime of a real nonnegative quadruple, with the quantities
/// the shortcut needs cached in the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AsymRegime<R> {
    Nothing,
    /// x, y, z all vanish against p.
    HugeP,
    /// p vanishes against the geometric mean of x, y, z; logarithmic
    /// blow-up as p -> +0.
    TinyP { f: R },
    /// max(x, y) = y vanishes against min(z, p).
    TinyY { a: R, g: R },
    /// max(x, p) vanishes against min(y, z) = y.
    HugeY,
    /// max(y, p) vanishes against z.
    HugeZ { b: R, h: R },
    /// x vanishing against min(y, p) wants the reduction through
    /// R_J(0, y, z, p); detection never selects it until the degenerate
    /// evaluation is accurate enough to back it.
    #[allow(dead_code)]
    TinyX,
}

/// Detect an asymptotic regime. Requires x <= y <= z, all nonnegative,
/// p > 0. The logarithmic regimes carry an a-priori sharpness test here
/// and an a-posteriori error estimate in `asym_eval`.
fn rj_asym_regime<R: CarlsonFloat>(x: R, y: R, z: R, p: R) -> AsymRegime<R> {
    let half = R::from_f64(0.5);

    if p != R::zero() && asymp_zero(z / p) {
        return AsymRegime::HugeP;
    }

    if abs_close_zero(p) || (x != R::zero() && asymp_zero(p / x)) {
        return AsymRegime::TinyP {
            f: (x * y * z).sqrt(),
        };
    }

    // The TinyX slot would go here.

    if (y > R::zero() && y <= R::from_f64(ASYM_CLOSE_UL)) || asymp_zero(y / z.min(p)) {
        let a = half * (x + y);
        let g = (x * y).sqrt();
        // Sharp even for large p.
        if (a / z + a / p) * (p / a).ln().abs() <= R::one() {
            return AsymRegime::TinyY { a, g };
        }
    }

    if y != R::zero() && asymp_zero(x.max(p) / y) {
        // Bound might not be sharp if x + 2p dwarfs (yz)^2, which would
        // take y, z beyond overflow anyway.
        return AsymRegime::HugeY;
    }

    if z != R::zero() && asymp_zero(y.max(p) / z) {
        let b = half * (x + y);
        let h = (x * y).sqrt();
        if (z / (b + h)).ln().abs() <= z.sqrt() {
            return AsymRegime::HugeZ { b, h };
        }
    }

    AsymRegime::Nothing
}

/// Evaluate the asymptotic shortcut for the detected regime.
///
/// `None` means no shortcut applies, or an a-posteriori error estimate
/// rejected one of the logarithmic regimes; the caller falls through to the
/// duplication iteration.
fn asym_eval<R>(x: R, y: R, z: R, p: R, rerr: R) -> Option<(R, Status)>
where
    R: CarlsonFloat + CarlsonArg<Real = R>,
{
    let one = R::one();
    let two = R::from_f64(2.0);
    let three = R::from_f64(3.0);

    match rj_asym_regime(x, y, z, p) {
        AsymRegime::Nothing => None,
        AsymRegime::HugeP => {
            let (fv, status) = rf(x, y, z, rerr);
            let pi = R::from_f64(core::f64::consts::PI);
            let v = three * (fv - R::from_f64(0.5) * pi / Float::sqrt(p)) / p;
            Some((v, status))
        }
        AsymRegime::TinyP { f } => {
            // Exact shift theorem, not an approximation: the recursive call
            // sees arguments displaced away from the singular corner.
            let r = rerr * R::from_f64(0.5);
            let (sx, sy, sz) = (Float::sqrt(x), Float::sqrt(y), Float::sqrt(z));
            let lamt = comp_dot(&[sx, sy, sz], &[sy, sz, sx]);
            let alpha = {
                let t = p * (sx + sy + sz) + f;
                t * t
            };
            let beta = {
                let t = p + lamt;
                t * t * p
            };
            let (rcv, status_c) = rc(alpha, beta, r);
            let (rjv, status) = rj(x + lamt, y + lamt, z + lamt, p + lamt, r);
            let status = if status_c != Status::Success {
                status_c
            } else {
                status
            };
            Some((comp_dot(&[three, two], &[rcv, rjv]), status))
        }
        AsymRegime::TinyY { a, g } => {
            let (tx, status) = rc(one, p / z, rerr);
            let v = Float::ln(R::from_f64(8.0) * z / (a + g)) - two * tx;
            let t = Float::ln(two * p / (a + g)) / (v * p);
            let r_est_l = t * g / (one - g / p);
            let r_est_h = t * a * (one + R::from_f64(0.5) * p / z) / (one - a / p);
            if r_est_h - r_est_l >= two * rerr {
                return None;
            }
            Some(((v + r_est_l) * R::from_f64(1.5) / (Float::sqrt(z) * p), status))
        }
        AsymRegime::HugeY => {
            let r = rerr / three;
            let s = one / Float::sqrt(y * z);
            let (t1, status_c) = rc(x, p, r);
            let (t2, status) = rg(R::zero(), y, z, r);
            let status = if status_c != Status::Success {
                status_c
            } else {
                status
            };
            Some((s * (three * t1 - two * t2 * s), status))
        }
        AsymRegime::HugeZ { b, h } => {
            let alpha = {
                let t = h + p;
                t * t
            };
            let (rcv, status) = rc(alpha, two * (b + h) * p, rerr);
            let r_est = R::from_f64(0.25)
                * (R::from_f64(0.5) + Float::ln_1p(two * z / Float::sqrt(h * p)))
                / (rcv * z);
            if r_est >= rerr {
                return None;
            }
            Some((rcv * three / Float::sqrt(z), status))
        }
        AsymRegime::TinyX => unimplemented!("reduction through R_J(0, y, z, p)"),
    }
}

/// Cauchy principal value for real nonnegative (x, y, z) and p < 0, through
/// the reduction to R_J at a shifted positive fourth argument plus R_F and
/// R_C terms. Requires x <= y <= z.
///
/// `Err` carries the first fatal sub-status; the caller substitutes the NaN
/// sentinel at its own scalar type.
fn cauchy_pv<R>(x: R, y: R, z: R, p: R, rerr: R) -> Result<(R, Status), Status>
where
    R: CarlsonFloat + CarlsonArg<Real = R>,
{
    let one = R::one();
    let three = R::from_f64(3.0);
    let r = rerr / three;
    let q = -p;
    let xy = x * y;
    let gamma = q / z + one;
    let pn = (comp_sum(&[x, y, q]) - xy / z) / gamma;

    let mut status = Status::Success;
    let (rjv, st) = rj(x, y, z, pn, r);
    if st.is_fatal() {
        return Err(st);
    }
    status = status.worst(st);

    let (rfv, st) = rf(x, y, z, r);
    if st.is_fatal() {
        return Err(st);
    }
    status = status.worst(st);

    let pq = pn * q;
    let xypq = xy + pq;
    let (rcv, st) = rc(xypq, pq, r);
    if st.is_fatal() {
        return Err(st);
    }
    status = status.worst(st);

    let weights = [
        pn / z - one,
        -three / z,
        three * Float::sqrt(xy / (xypq * z)),
    ];
    let v = comp_dot(&weights, &[rjv, rfv, rcv]) / gamma;
    Ok((v, status))
}

/// Running state of the duplication iteration: current arguments, their
/// quartered initial deviations, the power-of-4 scale, and the convergence
/// threshold. One `fold` is one duplication step; it owns nothing mutable
/// outside the state it returns.
struct DupState<T: CarlsonArg> {
    x: T,
    y: T,
    z: T,
    p: T,
    a: T,
    xx: T,
    yy: T,
    zz: T,
    d4: T::Real,
    fterm: T::Real,
}

impl<T: CarlsonArg> DupState<T> {
    /// Duplication quantities of the current arguments: lambda and the
    /// product d_m = (sqrt(p)+sqrt(x))(sqrt(p)+sqrt(y))(sqrt(p)+sqrt(z)).
    fn lambda_d(&self) -> (T, T) {
        let (sx, sy, sz) = (self.x.sqrt(), self.y.sqrt(), self.z.sqrt());
        let sp = self.p.sqrt();
        let lam = comp_dot(&[sx, sy, sz], &[sy, sz, sx]);
        let d = (sp + sx) * (sp + sy) * (sp + sz);
        (lam, d)
    }

    fn fold(self, lam: T) -> Self {
        let quarter = T::Real::from_f64(0.25);
        DupState {
            x: (self.x + lam).scale(quarter),
            y: (self.y + lam).scale(quarter),
            z: (self.z + lam).scale(quarter),
            p: (self.p + lam).scale(quarter),
            a: (self.a + lam).scale(quarter),
            xx: self.xx.scale(quarter),
            yy: self.yy.scale(quarter),
            zz: self.zz.scale(quarter),
            d4: self.d4 * quarter,
            fterm: self.fterm * quarter,
        }
    }

    fn max_dev(&self) -> T::Real {
        self.xx
            .modulus()
            .max(self.yy.modulus())
            .max(self.zz.modulus())
            .max((self.a - self.p).modulus())
    }
}

/// Duplication iteration with the fifth-order Taylor finish, for arguments
/// already known to be admissible and not asymptotically degenerate.
pub(crate) fn duplication<T: CarlsonArg>(x: T, y: T, z: T, p: T, rerr: T::Real) -> (T, Status) {
    let half = T::Real::from_f64(0.5);
    let two = T::Real::from_f64(2.0);
    let three = T::Real::from_f64(3.0);
    let five = T::Real::from_f64(5.0);

    let a0 = comp_sum(&[x, y, z, p, p]).unscale(five);
    let delta = (p - x) * (p - y) * (p - z);
    let mut st = DupState {
        x,
        y,
        z,
        p,
        a: a0,
        xx: a0 - x,
        yy: a0 - y,
        zz: a0 - z,
        d4: T::Real::one(),
        fterm: T::Real::zero(),
    };
    st.fterm = st.max_dev() / sixth_root(rerr / five);

    let (lam, d) = st.lambda_d();
    let mut s = d.scale(half);
    st = st.fold(lam);

    let mut status = Status::Success;
    let mut m = 1u32;
    loop {
        let a_abs = st.a.modulus();
        if a_abs > st.fterm && a_abs > st.max_dev() {
            break;
        }
        if m > MAX_ITER {
            status = Status::IterationLimit;
            break;
        }
        // s-recurrence tracking prod (1 + delta 4^-m / s_m^2)^... through
        // the folds; keeps the arctangent correction term exact.
        let rm = s * ((delta.scale(st.d4) / (s * s) + T::one()).sqrt() + T::one());
        let (lam, d) = st.lambda_d();
        s = (rm * d - delta.scale(st.d4 * st.d4)).scale(half) / (d + rm.scale(st.d4));
        st = st.fold(lam);
        m += 1;
    }

    // Re-balance the centroid before forming the expansion variables.
    let am = comp_sum(&[st.x, st.y, st.z, st.p, st.p]).unscale(five);
    let xx = st.xx / am;
    let yy = st.yy / am;
    let zz = st.zz / am;
    let pp = comp_sum(&[xx, yy, zz]).scale(-half);
    let pp2 = pp * pp;
    let xyz = xx * yy * zz;
    let e2 = comp_dot(&[xx, yy, zz, pp.scale(-three)], &[yy, zz, xx, pp]);
    let e3 = xyz + pp.scale(two) * (e2 + pp2.scale(two));
    let e4 = (xyz.scale(two) + (e2 + pp2.scale(three)) * pp) * pp;
    let e5 = xyz * pp2;
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
    let mut v = corr.scale(st.d4) / (t * t * t);
    let targ = delta.scale(st.d4) / (s * s);
    v = v + targ.atan_sqrt_div().scale(three) / s;
    (v, status)
}

/// Compute R_J(x, y, z, p) to relative error `rerr`.
///
/// The symmetric triple (x, y, z) must have good phase with at most one
/// structural zero, or contain a nonreal conjugate pair next to a real
/// nonnegative third argument. Real nonnegative triples with p < 0 are
/// evaluated as a Cauchy principal value. Two vanishing symmetric arguments
/// are a pole and report `Status::Singular` with a signed infinity whose
/// sign follows Re p.
pub fn rj<T: CarlsonArg>(x: T, y: T, z: T, p: T, rerr: T::Real) -> (T, Status) {
    if !rerr_ok(rerr) {
        return (T::nan(), Status::BadTolerance);
    }

    let mut args = [x, y, z];
    args.sort_unstable_by(|a, b| {
        a.re().partial_cmp(&b.re()).unwrap_or(core::cmp::Ordering::Equal)
    });
    let [x, y, z] = args;

    let (admissible, cases) = classify(x, y, z, p);
    if !admissible {
        if cases.good_infinity {
            return (T::zero(), Status::Success);
        }
        if cases.retry_caupv {
            return match cauchy_pv(x.re(), y.re(), z.re(), p.re(), rerr) {
                Ok((v, status)) => (T::from_real(v), status),
                Err(status) => (T::nan(), status),
            };
        }
        if cases.hit_pole {
            let v = if p.re() < T::Real::zero() {
                -T::huge()
            } else {
                T::huge()
            };
            return (v, Status::Singular);
        }
        return (T::nan(), Status::BadArguments);
    }

    if cases.maybe_asymp {
        if let Some((v, status)) = asym_eval(x.re(), y.re(), z.re(), p.re(), rerr) {
            return (T::from_real(v), status);
        }
    }
    duplication(x, y, z, p, rerr)
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
    fn rj_carlson_battery_real() {
        // Reference values from Carlson (1995), section 3.
        let (v, status) = rj(0.0, 1.0, 2.0, 3.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 0.77688623778582, 1e-11);

        let (v, status) = rj(2.0, 3.0, 4.0, 5.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 0.14297579667157, 1e-11);
    }

    #[test]
    fn rj_carlson_battery_complex() {
        // R_J(i, -i, 0, 2) = 1.6490011662711 (real).
        let i = Complex64::new(0.0, 1.0);
        let zero = Complex64::new(0.0, 0.0);
        let (v, status) = rj(i, -i, zero, Complex64::new(2.0, 0.0), RERR);
        assert_eq!(status, Status::Success);
        assert!((v.re - 1.6490011662711).abs() < 1e-11);
        assert!(v.im.abs() < 1e-11);

        // R_J(-1+i, -1-i, 1, 2) = 0.94148358841220 (real).
        let (v, status) = rj(
            Complex64::new(-1.0, 1.0),
            Complex64::new(-1.0, -1.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            RERR,
        );
        assert_eq!(status, Status::Success);
        assert!((v.re - 0.94148358841220).abs() < 1e-11);
        assert!(v.im.abs() < 1e-11);
    }

    #[test]
    fn rj_equal_arguments_closed_form() {
        // R_J(a, a, a, a) = a^(-3/2)
        let (v, status) = rj(4.0, 4.0, 4.0, 4.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(v, 0.125, 1e-13);
    }

    #[test]
    fn rj_symmetric_in_first_triple() {
        let (base, _) = rj(0.5, 2.0, 5.0, 3.0, RERR);
        for (a, b, c) in [(2.0, 0.5, 5.0), (5.0, 2.0, 0.5), (0.5, 5.0, 2.0)] {
            let (v, status) = rj(a, b, c, 3.0, RERR);
            assert_eq!(status, Status::Success);
            assert_close(v, base, 1e-12);
        }
    }

    #[test]
    fn rj_scale_homogeneity() {
        // R_J(kx, ky, kz, kp) = k^(-3/2) R_J(x, y, z, p)
        let (v1, _) = rj(1.0, 2.0, 3.0, 4.0, RERR);
        let (vk, _) = rj(4.0, 8.0, 12.0, 16.0, RERR);
        assert_close(vk * 8.0, v1, 1e-11);
    }

    #[test]
    fn rj_good_infinity_is_zero() {
        let (v, status) = rj(1.0, 2.0, 3.0, f64::INFINITY, RERR);
        assert_eq!(status, Status::Success);
        assert_eq!(v, 0.0);

        let (v, status) = rj(1.0, 2.0, f64::INFINITY, 3.0, RERR);
        assert_eq!(status, Status::Success);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn rj_pole_is_signed_infinity() {
        let (v, status) = rj(0.0_f64, 0.0, 1.0, 2.0, RERR);
        assert_eq!(status, Status::Singular);
        assert!(v.is_infinite() && v > 0.0);

        let (v, status) = rj(0.0_f64, 0.0, 1.0, -2.0, RERR);
        assert_eq!(status, Status::Singular);
        assert!(v.is_infinite() && v < 0.0);
    }

    #[test]
    fn rj_bad_arguments() {
        let (v, status) = rj(-1.0_f64, 2.0, 3.0, 4.0, RERR);
        assert_eq!(status, Status::BadArguments);
        assert!(v.is_nan());

        // Conjugate pair with a negative real third argument.
        let (v, status) = rj(
            Complex64::new(1.0, 2.0),
            Complex64::new(1.0, -2.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(2.0, 0.0),
            RERR,
        );
        assert_eq!(status, Status::BadArguments);
        assert!(v.re.is_nan());
    }

    #[test]
    fn rj_bad_tolerance() {
        let (v, status) = rj(1.0_f64, 2.0, 3.0, 4.0, 2.0e-4);
        assert_eq!(status, Status::BadTolerance);
        assert!(v.is_nan());
    }

    #[test]
    fn rj_principal_value_matches_complex_limit() {
        // For p < 0 the principal value is the real part of the limit from
        // either side of the cut.
        let (pv, status) = rj(2.0, 3.0, 4.0, -0.5, RERR);
        assert_eq!(status, Status::Success);
        let (lim, status) = rj(
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
            Complex64::new(4.0, 0.0),
            Complex64::new(-0.5, 1.0e-8),
            RERR,
        );
        assert_eq!(status, Status::Success);
        assert_close(pv, lim.re, 1e-6);
    }

    #[test]
    fn rj_principal_value_homogeneity() {
        let (v1, status) = rj(1.0, 2.0, 3.0, -1.5, RERR);
        assert_eq!(status, Status::Success);
        let (vk, status) = rj(4.0, 8.0, 12.0, -6.0, RERR);
        assert_eq!(status, Status::Success);
        assert_close(vk * 8.0, v1, 1e-10);
    }

    #[test]
    fn rj_huge_p_shortcut_consistent_with_duplication() {
        let p = 1.0e33;
        let (va, sa) = rj(1.0, 2.0, 3.0, p, RERR);
        assert_eq!(sa, Status::Success);
        let (vd, sd) = duplication(1.0, 2.0, 3.0, p, RERR);
        assert_eq!(sd, Status::Success);
        assert_close(va, vd, 1e-8);
    }

    #[test]
    fn rj_tiny_p_shortcut_reference_value() {
        // R_J(1, 2, 3, 1e-27) against a 40-digit reference. The shift
        // theorem keeps full accuracy here; the plain duplication loop is
        // not a usable yardstick this deep in the logarithmic regime, it
        // loses several digits to cancellation in delta.
        let (v, status) = rj(1.0, 2.0, 3.0, 1.0e-27, 1.0e-10);
        assert_eq!(status, Status::Success);
        assert_close(v, 38.022865991760114, 1e-9);
    }

    #[test]
    fn rj_tiny_y_shortcut_consistent_with_duplication() {
        let (va, sa) = rj(1.0e-32, 1.0e-28, 2.0, 3.0, RERR);
        assert_eq!(sa, Status::Success);
        let (vd, sd) = duplication(1.0e-32, 1.0e-28, 2.0, 3.0, RERR);
        assert_eq!(sd, Status::Success);
        assert_close(va, vd, 1e-6);
    }

    #[test]
    fn rj_huge_y_shortcut_consistent_with_duplication() {
        let (va, sa) = rj(1.0, 1.0e33, 2.0e33, 3.0, RERR);
        assert_eq!(sa, Status::Success);
        let (vd, sd) = duplication(1.0, 1.0e33, 2.0e33, 3.0, RERR);
        assert_eq!(sd, Status::Success);
        assert_close(va, vd, 1e-6);
    }

    #[test]
    fn rj_huge_z_shortcut_consistent_with_duplication() {
        let (va, sa) = rj(1.0, 2.0, 1.0e33, 3.0, RERR);
        assert_eq!(sa, Status::Success);
        let (vd, sd) = duplication(1.0, 2.0, 1.0e33, 3.0, RERR);
        assert_eq!(sd, Status::Success);
        assert_close(va, vd, 1e-6);
    }

    #[test]
    fn rj_extreme_scales_stay_bounded() {
        // Across many decades of argument scale the routine must come back
        // with a finite value and at worst a degraded status.
        for k in [1.0e-60, 1.0e-20, 1.0, 1.0e20, 1.0e60] {
            let (v, status) = rj(1.0 * k, 2.0 * k, 3.0 * k, 4.0 * k, RERR);
            assert!(!status.is_fatal(), "scale {k}: {status:?}");
            assert!(v.is_finite(), "scale {k}: {v}");
        }
    }

    #[test]
    fn rj_duplication_matches_rd_degenerate_case() {
        let (vj, sj) = rj(0.5, 2.0, 3.0, 3.0, RERR);
        let (vd, sd) = crate::rd::rd(0.5, 2.0, 3.0, RERR);
        assert_eq!(sj, Status::Success);
        assert_eq!(sd, Status::Success);
        assert_close(vj, vd, 1e-10);
    }

    #[test]
    fn rj_f32_basic() {
        let (v, status) = rj(2.0_f32, 3.0, 4.0, 5.0, 1.0e-5);
        assert_eq!(status, Status::Success);
        assert!((v - 0.142975_8).abs() < 1e-4);
    }
}
