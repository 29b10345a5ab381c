//! Synthetic forward index level via put-call parity.
//!
//! The forward is anchored at the strike where call and put mid-prices
//! diverge least, then adjusted by the discounted call/put spread:
//! `F = K + e^{rT} · (call_mid − put_mid)`.

use crate::error::{Result, VixError};
use crate::types::{ForwardPrice, TermContext};

/// Estimate the forward level for one term.
///
/// Scans the chain in strike-ascending order tracking the smallest
/// `|call_mid − put_mid|`. The comparison is strict, so on ties the first
/// (lowest-strike) minimal record stays the anchor.
///
/// # Errors
/// Returns [`VixError::EmptyQuoteSet`] for an empty chain, where the
/// forward is undefined.
pub fn forward_price(ctx: &TermContext) -> Result<ForwardPrice> {
    // (|spread|, anchor strike, signed spread)
    let mut best: Option<(f64, f64, f64)> = None;

    for q in &ctx.quotes {
        let spread = q.call_mid() - q.put_mid();
        let diff = spread.abs();
        match best {
            Some((min_diff, _, _)) if diff >= min_diff => {}
            _ => best = Some((diff, q.strike, spread)),
        }
    }

    let (_, anchor, spread) = best.ok_or(VixError::EmptyQuoteSet { term: ctx.term })?;
    let growth = (ctx.risk_free_rate * ctx.year_fraction()).exp();
    Ok(ForwardPrice(anchor + growth * spread))
}
