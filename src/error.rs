//! Error types for the vixcalc library.
//!
//! All fallible operations return `Result<T, VixError>` rather than
//! panicking. Every error names the term it belongs to, so a two-term run
//! that fails can always say which chain and which stage raised it. All
//! errors are fatal: the calculation is one-shot and has no partial result.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Term;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, VixError>;

/// Errors that can occur while loading quotes or running the index pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VixError {
    /// A term's quote file could not be opened or read.
    #[error("{term}: quote file {path:?} could not be read: {source}")]
    Io {
        term: Term,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not decode into exactly five numeric fields.
    #[error("{term}: line {line_no} is not five tab-separated numbers: {line:?}")]
    MalformedRecord {
        term: Term,
        /// 1-based line number in the input.
        line_no: usize,
        line: String,
    },

    /// A term has zero quote records, leaving the forward price undefined.
    #[error("{term}: quote chain is empty, forward price is undefined")]
    EmptyQuoteSet { term: Term },

    /// No strike lies strictly below the computed forward price.
    #[error("{term}: no strike lies below the forward price {forward}")]
    NoAtmStrike { term: Term, forward: f64 },

    /// Fewer than two strikes survived selection; strike spacing is undefined.
    #[error("{term}: only {selected} option(s) survived selection, need at least 2")]
    InsufficientSelection { term: Term, selected: usize },
}
