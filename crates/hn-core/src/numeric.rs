use crate::{HnError, HnResult};

/// Flow rates, ceilings and split proportions.
pub type Real = f64;

/// Slack allowed when comparing computed flows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Enough for flows that went through a few levels of splitting.
    pub const FLOW: Self = Self {
        abs: 1e-12,
        rel: 1e-9,
    };

    /// Fixed slack, independent of magnitude.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::FLOW
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> HnResult<Real> {
    if !v.is_finite() {
        return Err(HnError::NonFinite { what, value: v });
    }
    Ok(v)
}

/// A usable flow rate or ceiling: finite and not negative.
pub fn ensure_flow(v: Real, what: &'static str) -> HnResult<Real> {
    if ensure_finite(v, what)? < 0.0 {
        return Err(HnError::InvalidArg { what });
    }
    Ok(v)
}
