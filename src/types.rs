//! Core domain types for the index calculation.
//!
//! **Outputs use newtypes** — [`ForwardPrice`], [`SigmaSquared`],
//! [`IndexValue`] wrap return values so callers can't accidentally feed a
//! variance where a forward level is expected.
//!
//! **Inputs use bare `f64`** — strikes, bids, and rates are taken raw for
//! ergonomics; parameter names make them self-documenting.
//!
//! These types wrap `f64` and therefore derive only `PartialEq` /
//! `PartialOrd` (NaN breaks total ordering). Do not add `Eq` or `Ord`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blend::MINUTES_PER_YEAR;

/// Which of the two expirations a value belongs to.
///
/// The near and next terms bracket the 30-day target horizon; everything in
/// the pipeline is tagged with one of the two so errors and diagnostics can
/// say which chain they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// The expiration nearer in time than the 30-day horizon.
    Near,
    /// The expiration farther in time than the 30-day horizon.
    Next,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Near => write!(f, "near term"),
            Term::Next => write!(f, "next term"),
        }
    }
}

/// One line of an option chain: a strike with its call and put quotes.
///
/// Immutable once loaded. Chains are assumed strictly ascending and unique
/// by strike; that is a caller precondition the core does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub strike: f64,
    pub call_bid: f64,
    pub call_ask: f64,
    pub put_bid: f64,
    pub put_ask: f64,
}

impl QuoteRecord {
    /// Call mid-price `(bid + ask) / 2`.
    pub fn call_mid(&self) -> f64 {
        (self.call_bid + self.call_ask) / 2.0
    }

    /// Put mid-price `(bid + ask) / 2`.
    pub fn put_mid(&self) -> f64 {
        (self.put_bid + self.put_ask) / 2.0
    }
}

/// Which side of the chain a selected option's price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Out-of-the-money put, below the at-the-money strike.
    Put,
    /// Out-of-the-money call, above the at-the-money strike.
    Call,
    /// The put/call average entry, exactly once, at the at-the-money strike.
    Average,
}

/// A strike included in the variance sum for one term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub strike: f64,
    pub kind: OptionKind,
    pub mid_price: f64,
}

/// A selected option together with its strike spacing and variance
/// contribution, as computed by the aggregation stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeContribution {
    pub strike: f64,
    pub kind: OptionKind,
    pub mid_price: f64,
    /// Centered strike spacing, one-sided at the ends of the selection.
    pub delta_k: f64,
    /// `deltaK / K² · e^{rT} · mid`.
    pub contribution: f64,
}

/// Synthetic forward index level `F` for one term.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ForwardPrice(pub f64);

/// Annualized variance estimate `σ²` for one term, before blending.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SigmaSquared(pub f64);

/// The final 30-day volatility index value, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct IndexValue(pub f64);

/// Per-term inputs to the pipeline: expiry clock, rate, and the quote chain.
///
/// Exactly two of these exist per run, one [`Term::Near`] and one
/// [`Term::Next`]. The chain must be pre-sorted ascending by strike; the
/// pipeline deliberately does not re-sort, since silently fixing the order
/// would mask a bug in the upstream data producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermContext {
    pub term: Term,
    /// Minutes from the calculation time to this term's expiration.
    pub minutes_to_expiry: u32,
    /// Risk-free rate for this term (continuously compounded, annualized).
    pub risk_free_rate: f64,
    pub quotes: Vec<QuoteRecord>,
}

impl TermContext {
    /// Time to expiry `T` in years: `minutes / (60 · 24 · 365)`.
    pub fn year_fraction(&self) -> f64 {
        f64::from(self.minutes_to_expiry) / MINUTES_PER_YEAR
    }
}
