//! The "no flow" sentinel.

use crate::numeric::Real;

/// Reported as the input of a Source and as the output of a Sink.
///
/// NaN never compares equal to a real flow, so it cannot be confused with
/// a zero or negative reading. Test for it with [`is_no_flow`].
pub const NO_FLOW: Real = Real::NAN;

/// Whether `v` is the [`NO_FLOW`] sentinel.
#[inline]
pub fn is_no_flow(v: Real) -> bool {
    v.is_nan()
}
