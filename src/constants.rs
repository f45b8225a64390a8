//! Shared tables and cutoffs for the Carlson integral algorithms.
//!
//! The Taylor tails of the duplication algorithms (Carlson, Numer.
//! Algorithms 10 (1995), 13-26) have rational coefficients; each family is
//! tabulated as exact integer numerators over one shared denominator so the
//! compensated Horner evaluation works on exactly representable values.
//! All tables are compile-time constants with no initialization order.

use crate::machine::CarlsonFloat;

/// Accepts a requested relative error iff it lies in (0, RERR_MAX].
/// NaN fails the comparison and is rejected with everything else.
#[inline]
pub(crate) fn rerr_ok<R: CarlsonFloat>(r: R) -> bool {
    r > R::zero() && r <= R::from_f64(RERR_MAX)
}

/// Iteration cap for every duplication loop. The arguments contract by a
/// factor of 4 per step, so for the supported tolerances the loops converge
/// in single digits to low tens of iterations; hitting this cap reports
/// `Status::IterationLimit` with the partial estimate.
pub(crate) const MAX_ITER: u32 = 100;

/// Conservative ceiling on the requested relative error. Beyond this the
/// asymptotic error estimates and the stopping criteria are no longer
/// guaranteed sharp.
pub(crate) const RERR_MAX: f64 = 1.0e-4;

/// Ratio cutoff for "a is asymptotically negligible against b": a/b in
/// (0, ASYM_ZERO_UL]. Roughly eps^2 for f64, which keeps the truncation
/// error of every closed-form shortcut below any accepted tolerance.
pub(crate) const ASYM_ZERO_UL: f64 = 2.5e-32;

/// Absolute cutoff for "negligibly small in its own right", used where a
/// variable's smallness (not a ratio) drives a logarithmic singularity.
pub(crate) const ASYM_CLOSE_UL: f64 = 1.0e-26;

// ── RJ / RD Taylor tail ──
//
// Both integrals share the R_{-3/2} expansion
//   1 - 3E2/14 + E3/6 + 9E2^2/88 - 3E4/22 - 9E2E3/52 + 3E5/26 - E2^3/16
//     + 3E3^2/40 + 3E2E4/20 + 45E2^2E3/272 - 9(E3E4 + E2E5)/68,
// regrouped as polynomials in E2 (or E3) paired with {1, 1, E3, E4, E5, E4}
// and normalized by one shared denominator.

/// Shared denominator of the RJ/RD coefficient tables.
pub(crate) const RDJ_DENOM: f64 = 4084080.0;

/// Polynomial in E2, paired with 1: -3E2/14 + 9E2^2/88 - E2^3/16.
#[rustfmt::skip]
pub(crate) const RDJ_C1: [f64; 4] = [0.0, -875160.0, 417690.0, -255255.0];

/// Polynomial in E3, paired with 1: E3/6 + 3E3^2/40.
#[rustfmt::skip]
pub(crate) const RDJ_C2: [f64; 3] = [0.0, 680680.0, 306306.0];

/// Polynomial in E2, paired with E3: -9E2/52 + 45E2^2/272.
#[rustfmt::skip]
pub(crate) const RDJ_C3: [f64; 3] = [0.0, -706860.0, 675675.0];

/// Polynomial in E2, paired with E4: -3/22 + 3E2/20.
#[rustfmt::skip]
pub(crate) const RDJ_C4: [f64; 2] = [-556920.0, 612612.0];

/// Polynomial in E2, paired with E5: 3/26 - 9E2/68. The linear coefficient
/// doubles as the E3*E4 cross-term numerator.
#[rustfmt::skip]
pub(crate) const RDJ_C5: [f64; 2] = [471240.0, -540540.0];

// ── RF Taylor tail ──
//
//   1 - E2/10 + E3/14 + E2^2/24 - 3E2E3/44 - 5E2^3/208 + 3E3^2/104
//     + E2^2E3/16

/// Shared denominator of the RF coefficient tables.
pub(crate) const RF_DENOM: f64 = 240240.0;

/// Polynomial in E2, paired with 1: -E2/10 + E2^2/24 - 5E2^3/208.
#[rustfmt::skip]
pub(crate) const RF_C1: [f64; 4] = [0.0, -24024.0, 10010.0, -5775.0];

/// Polynomial in E2, paired with E3: 1/14 - 3E2/44 + E2^2/16.
#[rustfmt::skip]
pub(crate) const RF_C2: [f64; 3] = [17160.0, -16380.0, 15015.0];

/// Numerator of the E3^2 term: 3/104.
pub(crate) const RF_E3E3: f64 = 6930.0;

// ── RC Taylor tail ──
//
//   1 + 3s^2/10 + s^3/7 + 3s^4/8 + 9s^5/22 + 159s^6/208 + 9s^7/8

/// Shared denominator of the RC coefficient table.
pub(crate) const RC_DENOM: f64 = 80080.0;

/// Single-variable tail in s (ascending, without the leading 1).
#[rustfmt::skip]
pub(crate) const RC_C: [f64; 8] = [
    0.0, 0.0, 24024.0, 11440.0, 30030.0, 32760.0, 61215.0, 90090.0,
];
