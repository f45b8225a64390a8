//! Status codes shared by every Carlson integral routine.

use core::fmt;

/// Outcome of a Carlson integral evaluation.
///
/// Every routine returns `(value, Status)`; no panics are used as control
/// flow. The variants split into two severity bands:
///
/// - *fatal* ([`BadTolerance`](Status::BadTolerance),
///   [`BadArguments`](Status::BadArguments), [`Singular`](Status::Singular)):
///   the returned value is a sentinel (NaN, or signed infinity for a pole)
///   and composite evaluations abort immediately;
/// - *degraded* ([`IterationLimit`](Status::IterationLimit)): the returned
///   value is the best estimate obtained before the iteration cap, and
///   composite evaluations keep going but report the worst degraded status
///   seen across their sub-calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Converged to the requested relative error.
    Success,
    /// Requested relative error is not in (0, 1e-4].
    BadTolerance,
    /// Arguments satisfy none of the valid or recoverable domain cases.
    BadArguments,
    /// A true pole of the integral was hit; the value is a signed infinity.
    Singular,
    /// Duplication loop hit its iteration cap before the stopping criterion;
    /// the partially converged estimate is still returned.
    IterationLimit,
}

impl Status {
    /// Fatal statuses abort composite evaluation and propagate a sentinel.
    #[inline]
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            Status::BadTolerance | Status::BadArguments | Status::Singular
        )
    }

    /// Degraded statuses carry a usable value but must not be upgraded to
    /// `Success` by callers that aggregate sub-results.
    #[inline]
    pub fn is_degraded(self) -> bool {
        matches!(self, Status::IterationLimit)
    }

    /// The worse of two statuses under the severity ordering
    /// `Success < IterationLimit < fatal`.
    #[inline]
    pub fn worst(self, other: Status) -> Status {
        if self.severity() >= other.severity() {
            self
        } else {
            other
        }
    }

    #[inline]
    fn severity(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::IterationLimit => 1,
            Status::Singular => 2,
            Status::BadArguments => 3,
            Status::BadTolerance => 4,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::BadTolerance => {
                write!(f, "bad tolerance: relative error must be in (0, 1e-4]")
            }
            Status::BadArguments => {
                write!(f, "bad arguments: input outside the integral's domain")
            }
            Status::Singular => write!(f, "singular: arguments hit a pole of the integral"),
            Status::IterationLimit => {
                write!(f, "iteration limit reached; result is a partial estimate")
            }
        }
    }
}
