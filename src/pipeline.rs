//! End-to-end orchestration.
//!
//! Each term runs the same linear pipeline — forward level, strike
//! selection, variance — with no data dependency on the other term, so the
//! two are evaluated on a `rayon::join`. The finished per-term numbers meet
//! only in the final 30-day blend.
//!
//! Every intermediate the calculation produces is captured in the returned
//! [`VixReport`], so callers decide how much to surface (the CLI's
//! verbosity levels) without the core printing anything itself.

use serde::{Deserialize, Serialize};

use crate::blend::{self, TermVariance};
use crate::error::Result;
use crate::types::{ForwardPrice, IndexValue, SigmaSquared, StrikeContribution, Term, TermContext};
use crate::{forward, selection, variance};

/// Everything one term's pipeline produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermReport {
    pub term: Term,
    pub minutes_to_expiry: u32,
    pub year_fraction: f64,
    pub risk_free_rate: f64,
    pub forward: ForwardPrice,
    /// `K0`, the largest strike strictly below [`TermReport::forward`].
    pub atm_strike: f64,
    pub sigma_squared: SigmaSquared,
    /// The selected options in strike order with spacing and contribution.
    pub contributions: Vec<StrikeContribution>,
}

impl TermReport {
    fn variance(&self) -> TermVariance {
        TermVariance {
            minutes_to_expiry: self.minutes_to_expiry,
            year_fraction: self.year_fraction,
            sigma_squared: self.sigma_squared,
        }
    }
}

/// Final index value plus per-term diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VixReport {
    pub near: TermReport,
    pub next: TermReport,
    pub value: IndexValue,
}

/// Run one term through forward estimation, selection, and variance.
///
/// # Errors
/// Propagates the first stage failure, tagged with the term
/// ([`crate::VixError::EmptyQuoteSet`], [`crate::VixError::NoAtmStrike`],
/// or [`crate::VixError::InsufficientSelection`]).
pub fn evaluate_term(ctx: &TermContext) -> Result<TermReport> {
    let forward = forward::forward_price(ctx)?;
    let selection = selection::select_options(ctx, forward)?;
    let (sigma_squared, contributions) = variance::sigma_squared(ctx, forward, &selection)?;

    Ok(TermReport {
        term: ctx.term,
        minutes_to_expiry: ctx.minutes_to_expiry,
        year_fraction: ctx.year_fraction(),
        risk_free_rate: ctx.risk_free_rate,
        forward,
        atm_strike: selection.atm_strike,
        sigma_squared,
        contributions,
    })
}

/// Run both terms and blend them into the final index value.
///
/// Caller obligation (documented, not checked): `near` expires before and
/// `next` after the 30-day horizon — see [`blend::interpolate`].
///
/// # Errors
/// The first failing term aborts the whole run; there is no partial result.
pub fn evaluate(near: &TermContext, next: &TermContext) -> Result<VixReport> {
    let (near_report, next_report) =
        rayon::join(|| evaluate_term(near), || evaluate_term(next));
    let near = near_report?;
    let next = next_report?;

    let value = blend::interpolate(near.variance(), next.variance());
    Ok(VixReport { near, next, value })
}
