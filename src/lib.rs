//! # vixcalc
//!
//! Reproduces the CBOE 30-day volatility index calculation from two
//! snapshots of option-quote chains, following the published methodology:
//! option mid-prices → per-term forward level → strike selection →
//! per-strike variance contributions → per-term annualized variance →
//! time-weighted blend into a single index value.
//!
//! ## Architecture
//!
//! - **`quotes`** — Tab-separated quote-chain loading (the only I/O)
//! - **`forward`** — Synthetic forward level via put-call parity
//! - **`selection`** — At-the-money strike and zero-bid strike trimming
//! - **`variance`** — Per-term variance from the selected strikes
//! - **`blend`** — 30-day constant-maturity blend of the two terms
//! - **`pipeline`** — Orchestration and the [`VixReport`] diagnostics
//!
//! ## Design
//!
//! - **Newtypes for outputs, bare `f64` for inputs.** [`ForwardPrice`],
//!   [`SigmaSquared`], [`IndexValue`] wrap return values to prevent
//!   accidental mixing. Inputs take raw `f64` for ergonomics.
//! - **No panics.** Every fallible operation returns [`Result`]. Library
//!   code never calls `unwrap()` or `expect()`.
//! - **No shared state.** Each stage is a value-returning function; the two
//!   terms are fully independent until the final blend and are evaluated in
//!   parallel.
//! - **Fail loudly.** Any malformed, empty, or degenerate input aborts the
//!   whole run with a [`VixError`] naming the term and the failing stage.
//!   There is no partial result and no fallback.
//! - **Serializable.** All value types and reports implement Serde
//!   `Serialize` / `Deserialize`.

pub mod blend;
pub mod error;
pub mod forward;
pub mod pipeline;
pub mod quotes;
pub mod selection;
pub mod variance;

mod types;

#[doc(inline)]
pub use error::{Result, VixError};
#[doc(inline)]
pub use pipeline::{evaluate, evaluate_term, TermReport, VixReport};
#[doc(inline)]
pub use selection::Selection;
pub use types::{
    ForwardPrice, IndexValue, OptionKind, QuoteRecord, SelectedOption, SigmaSquared,
    StrikeContribution, Term, TermContext,
};
