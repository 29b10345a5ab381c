//! Per-term variance from the selected strikes.
//!
//! Step 2 of the methodology: each selected option contributes
//! `ΔK/K² · e^{rT} · mid`, the contributions are summed and scaled by
//! `2/T`, and the forward/ATM convexity correction `(1/T)(F/K0 − 1)²` is
//! subtracted.

use crate::error::{Result, VixError};
use crate::selection::Selection;
use crate::types::{ForwardPrice, SigmaSquared, StrikeContribution, TermContext};

/// Annualized variance for one term, with the per-strike breakdown.
///
/// Strike spacing `ΔK` is the centered difference `(K[i+1] − K[i−1])/2`,
/// falling back to the one-sided neighbor gap at either end of the
/// selection.
///
/// # Errors
/// Returns [`VixError::InsufficientSelection`] when fewer than two options
/// survived selection: with a single entry both end rules collide on an
/// element with no neighbor, so the spacing is undefined. This is a hard
/// failure, never a guessed fallback.
pub fn sigma_squared(
    ctx: &TermContext,
    forward: ForwardPrice,
    selection: &Selection,
) -> Result<(SigmaSquared, Vec<StrikeContribution>)> {
    let opts = &selection.options;
    let n = opts.len();
    if n < 2 {
        return Err(VixError::InsufficientSelection {
            term: ctx.term,
            selected: n,
        });
    }

    let t = ctx.year_fraction();
    let growth = (ctx.risk_free_rate * t).exp();

    let mut contributions = Vec::with_capacity(n);
    let mut sum = 0.0;
    for (i, opt) in opts.iter().enumerate() {
        let delta_k = if i == 0 {
            opts[1].strike - opts[0].strike
        } else if i == n - 1 {
            opts[n - 1].strike - opts[n - 2].strike
        } else {
            (opts[i + 1].strike - opts[i - 1].strike) / 2.0
        };
        let contribution = delta_k / (opt.strike * opt.strike) * growth * opt.mid_price;
        sum += contribution;
        contributions.push(StrikeContribution {
            strike: opt.strike,
            kind: opt.kind,
            mid_price: opt.mid_price,
            delta_k,
            contribution,
        });
    }

    let aggregated = 2.0 / t * sum;
    let skew = forward.0 / selection.atm_strike - 1.0;
    Ok((SigmaSquared(aggregated - skew * skew / t), contributions))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::types::{OptionKind, SelectedOption, Term};

    fn option(strike: f64, kind: OptionKind, mid_price: f64) -> SelectedOption {
        SelectedOption {
            strike,
            kind,
            mid_price,
        }
    }

    fn ctx(minutes: u32, rate: f64) -> TermContext {
        TermContext {
            term: Term::Near,
            minutes_to_expiry: minutes,
            risk_free_rate: rate,
            quotes: vec![],
        }
    }

    /// Five-strike selection around K0 = 100 with F = 101 and r = 0.
    fn sample_selection() -> Selection {
        Selection {
            atm_strike: 100.0,
            options: vec![
                option(90.0, OptionKind::Put, 1.5),
                option(95.0, OptionKind::Put, 2.5),
                option(100.0, OptionKind::Average, 4.5),
                option(105.0, OptionKind::Call, 2.5),
                option(110.0, OptionKind::Call, 1.0),
            ],
        }
    }

    #[test]
    fn hand_computed_sigma_squared() {
        // T = 0.25 (131400 minutes), r = 0, ΔK = 5 everywhere.
        // Σ ΔK/K²·mid = 5·1.5/8100 + 5·2.5/9025 + 5·4.5/10000
        //             + 5·2.5/11025 + 5·1/12100 = 0.006107977465742
        // σ² = (2·Σ − (101/100 − 1)²) / 0.25
        let ctx = ctx(131_400, 0.0);
        let (sigma, _) = sigma_squared(&ctx, ForwardPrice(101.0), &sample_selection()).unwrap();
        assert_abs_diff_eq!(sigma.0, 0.048_463_819_725_936, epsilon = 1e-12);
    }

    #[test]
    fn delta_k_one_sided_at_ends_centered_inside() {
        let ctx = ctx(131_400, 0.0);
        let selection = Selection {
            atm_strike: 100.0,
            options: vec![
                option(90.0, OptionKind::Put, 1.0),
                option(95.0, OptionKind::Put, 1.0),
                option(100.0, OptionKind::Average, 1.0),
                option(110.0, OptionKind::Call, 1.0),
            ],
        };
        let (_, contributions) =
            sigma_squared(&ctx, ForwardPrice(101.0), &selection).unwrap();

        let spacings: Vec<f64> = contributions.iter().map(|c| c.delta_k).collect();
        // First: 95−90. Middle: (100−90)/2, (110−95)/2. Last: 110−100.
        assert_eq!(spacings, vec![5.0, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn contributions_carry_the_growth_factor() {
        let rate = 0.02;
        let ctx = ctx(131_400, rate);
        let (_, contributions) =
            sigma_squared(&ctx, ForwardPrice(101.0), &sample_selection()).unwrap();

        let growth = (rate * 0.25_f64).exp();
        let first = &contributions[0];
        assert_abs_diff_eq!(
            first.contribution,
            5.0 / (90.0 * 90.0) * growth * 1.5,
            epsilon = 1e-15
        );
    }

    #[test]
    fn two_entry_selection_is_accepted() {
        let ctx = ctx(131_400, 0.0);
        let selection = Selection {
            atm_strike: 100.0,
            options: vec![
                option(100.0, OptionKind::Average, 4.5),
                option(105.0, OptionKind::Call, 2.5),
            ],
        };
        let (_, contributions) =
            sigma_squared(&ctx, ForwardPrice(101.0), &selection).unwrap();
        // Both entries use the same neighbor gap.
        assert_eq!(contributions[0].delta_k, 5.0);
        assert_eq!(contributions[1].delta_k, 5.0);
    }

    #[test]
    fn single_entry_selection_is_rejected() {
        let ctx = ctx(131_400, 0.0);
        let selection = Selection {
            atm_strike: 100.0,
            options: vec![option(100.0, OptionKind::Average, 4.5)],
        };
        let err = sigma_squared(&ctx, ForwardPrice(101.0), &selection).unwrap_err();
        assert!(matches!(
            err,
            VixError::InsufficientSelection {
                term: Term::Near,
                selected: 1
            }
        ));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let ctx = ctx(131_400, 0.0);
        let selection = Selection {
            atm_strike: 100.0,
            options: vec![],
        };
        let err = sigma_squared(&ctx, ForwardPrice(101.0), &selection).unwrap_err();
        assert!(matches!(
            err,
            VixError::InsufficientSelection { selected: 0, .. }
        ));
    }
}
