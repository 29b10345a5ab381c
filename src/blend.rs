//! 30-day constant-maturity blend of the two term variances.
//!
//! The near- and next-term variances are weighted by how far each
//! expiration sits from the 30-day target horizon, measured in minutes,
//! then re-annualized and quoted as a percentage volatility.

use serde::{Deserialize, Serialize};

use crate::types::{IndexValue, SigmaSquared};

/// Minutes in the 30-day target horizon: `30 · 1440`.
pub const MINUTES_30_DAYS: f64 = 30.0 * 1440.0;

/// Minutes in a 365-day year: `365 · 1440`.
pub const MINUTES_PER_YEAR: f64 = 365.0 * 1440.0;

/// One term's finished numbers entering the blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermVariance {
    pub minutes_to_expiry: u32,
    pub year_fraction: f64,
    pub sigma_squared: SigmaSquared,
}

/// Blend the two per-term variances into the final index value.
///
/// ```text
/// w_near = (Nt_next − N30) / (Nt_next − Nt_near)
/// w_next = (N30 − Nt_near) / (Nt_next − Nt_near)
/// VIX    = 100 · √( (T_near·σ²_near·w_near + T_next·σ²_next·w_next) · N365/N30 )
/// ```
///
/// Caller obligation: `Nt_near < N30 < Nt_next`, i.e. the two expirations
/// bracket the 30-day horizon. Violating this produces weights outside
/// `[0, 1]` and a financially meaningless (though finite) result; it is not
/// checked at runtime.
pub fn interpolate(near: TermVariance, next: TermVariance) -> IndexValue {
    let nt_near = f64::from(near.minutes_to_expiry);
    let nt_next = f64::from(next.minutes_to_expiry);
    let span = nt_next - nt_near;

    let w_near = (nt_next - MINUTES_30_DAYS) / span;
    let w_next = (MINUTES_30_DAYS - nt_near) / span;

    let blended = (near.year_fraction * near.sigma_squared.0 * w_near
        + next.year_fraction * next.sigma_squared.0 * w_next)
        * MINUTES_PER_YEAR
        / MINUTES_30_DAYS;

    IndexValue(100.0 * blended.sqrt())
}
