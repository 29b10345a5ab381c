//! Strike selection around the at-the-money strike.
//!
//! Step 1 of the methodology: find the at-the-money strike `K0` (largest
//! strike strictly below the forward), seed the selection with the put/call
//! average at `K0`, then extend outward in both directions, dropping
//! zero-bid quotes and stopping after two consecutive zero bids.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VixError};
use crate::types::{ForwardPrice, OptionKind, QuoteRecord, SelectedOption, TermContext};

/// Outcome of strike selection for one term: the at-the-money strike and
/// the strike-ascending option list entering the variance sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// `K0`, the largest strike strictly below the forward price.
    pub atm_strike: f64,
    /// Puts ascending, then the average entry at `K0`, then calls ascending.
    pub options: Vec<SelectedOption>,
}

/// Select the options entering the variance calculation for one term.
///
/// The result may be degenerate (a single entry) when every neighbor of
/// `K0` is trimmed; the variance stage rejects that case, not this one.
///
/// # Errors
/// Returns [`VixError::NoAtmStrike`] when no strike lies strictly below
/// the forward price.
pub fn select_options(ctx: &TermContext, forward: ForwardPrice) -> Result<Selection> {
    let quotes = &ctx.quotes;

    // Chains are ascending, so the last strike below F is the largest one.
    // A strike exactly equal to F does not qualify (strict comparison).
    let atm_idx = quotes
        .iter()
        .rposition(|q| q.strike < forward.0)
        .ok_or(VixError::NoAtmStrike {
            term: ctx.term,
            forward: forward.0,
        })?;
    let atm = &quotes[atm_idx];

    // Downward put scan, accumulated high-to-low then reversed so the final
    // list is built ascending without front-insertion.
    let mut puts = Vec::new();
    scan(&mut puts, quotes[..atm_idx].iter().rev(), |q| {
        (q.put_bid, OptionKind::Put, q.put_mid())
    });
    puts.reverse();

    let mut options = puts;
    options.push(SelectedOption {
        strike: atm.strike,
        kind: OptionKind::Average,
        mid_price: (atm.call_mid() + atm.put_mid()) / 2.0,
    });

    // Upward call scan, symmetric on call bids.
    scan(&mut options, quotes[atm_idx + 1..].iter(), |q| {
        (q.call_bid, OptionKind::Call, q.call_mid())
    });

    Ok(Selection {
        atm_strike: atm.strike,
        options,
    })
}

/// Directional scan away from `K0`.
///
/// A quote with a positive bid is included. A zero-bid quote is skipped,
/// and terminates the scan only when the quote just processed (one step
/// closer to `K0`) also had a zero bid — the previous-bid state updates on
/// every step regardless of inclusion, so a lone zero bid between live
/// quotes does not end the walk.
fn scan<'a, I, F>(out: &mut Vec<SelectedOption>, quotes: I, side: F)
where
    I: Iterator<Item = &'a QuoteRecord>,
    F: Fn(&QuoteRecord) -> (f64, OptionKind, f64),
{
    let mut prev_bid_zero = false;
    for q in quotes {
        let (bid, kind, mid_price) = side(q);
        if bid > 0.0 {
            out.push(SelectedOption {
                strike: q.strike,
                kind,
                mid_price,
            });
            prev_bid_zero = false;
        } else {
            if prev_bid_zero {
                break;
            }
            prev_bid_zero = true;
        }
    }
}
