//! Tab-separated quote-chain loading.
//!
//! Input format: one quote record per line, five float columns separated by
//! a tab — `strike, call bid, call ask, put bid, put ask`. Lines must be
//! pre-sorted ascending by strike. That ordering is a caller obligation and
//! is deliberately not re-checked or repaired here: silently re-sorting
//! would mask a bug in the upstream data producer.
//!
//! The rest of the crate consumes [`TermContext`] values and does not care
//! whether they came from files, so in-memory chains can bypass this module
//! entirely.

use std::fs;
use std::path::Path;

use crate::error::{Result, VixError};
use crate::types::{QuoteRecord, Term, TermContext};

/// Parse one quote line.
///
/// `line_no` is 1-based and is only used for error reporting.
///
/// # Errors
/// Returns [`VixError::MalformedRecord`] unless the line holds exactly five
/// numeric fields.
pub fn parse_line(term: Term, line_no: usize, line: &str) -> Result<QuoteRecord> {
    let malformed = || VixError::MalformedRecord {
        term,
        line_no,
        line: line.to_string(),
    };

    let fields = line
        .trim()
        .split('\t')
        .map(|f| f.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .map_err(|_| malformed())?;

    match fields[..] {
        [strike, call_bid, call_ask, put_bid, put_ask] => Ok(QuoteRecord {
            strike,
            call_bid,
            call_ask,
            put_bid,
            put_ask,
        }),
        _ => Err(malformed()),
    }
}

/// Parse a whole chain from text, one record per line.
pub fn parse_chain(term: Term, text: &str) -> Result<Vec<QuoteRecord>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| parse_line(term, i + 1, line))
        .collect()
}

/// Load one term's quote file and wrap it with its expiry clock and rate.
///
/// # Errors
/// Returns [`VixError::Io`] when the file cannot be read and
/// [`VixError::MalformedRecord`] on the first undecodable line.
pub fn load_term(
    term: Term,
    path: &Path,
    minutes_to_expiry: u32,
    risk_free_rate: f64,
) -> Result<TermContext> {
    let text = fs::read_to_string(path).map_err(|source| VixError::Io {
        term,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TermContext {
        term,
        minutes_to_expiry,
        risk_free_rate,
        quotes: parse_chain(term, &text)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    #[test]
    fn parses_a_well_formed_line() {
        let q = parse_line(Term::Near, 1, "1950\t23.9\t26.3\t19.8\t21.8").unwrap();
        assert_eq!(q.strike, 1950.0);
        assert_eq!(q.call_bid, 23.9);
        assert_eq!(q.call_ask, 26.3);
        assert_eq!(q.put_bid, 19.8);
        assert_eq!(q.put_ask, 21.8);
    }

    #[test]
    fn parses_a_multi_line_chain_in_order() {
        let text = "100\t1\t2\t3\t4\n105\t5\t6\t7\t8\n";
        let chain = parse_chain(Term::Next, text).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].strike, 100.0);
        assert_eq!(chain[1].strike, 105.0);
    }

    #[test]
    fn rejects_too_few_fields() {
        let err = parse_line(Term::Near, 3, "100\t1\t2\t3").unwrap_err();
        assert!(matches!(
            err,
            VixError::MalformedRecord { line_no: 3, .. }
        ));
    }

    #[test]
    fn rejects_too_many_fields() {
        let err = parse_line(Term::Near, 1, "100\t1\t2\t3\t4\t5").unwrap_err();
        assert!(matches!(err, VixError::MalformedRecord { .. }));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let err = parse_line(Term::Next, 2, "100\t1\tx\t3\t4").unwrap_err();
        assert!(matches!(
            err,
            VixError::MalformedRecord {
                term: Term::Next,
                line_no: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_blank_interior_line() {
        let text = "100\t1\t2\t3\t4\n\n105\t5\t6\t7\t8\n";
        let err = parse_chain(Term::Near, text).unwrap_err();
        assert!(matches!(err, VixError::MalformedRecord { line_no: 2, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_term(
            Term::Near,
            &PathBuf::from("/definitely/not/here.dat"),
            35_924,
            0.000305,
        )
        .unwrap_err();
        assert!(matches!(err, VixError::Io { term: Term::Near, .. }));
    }

    #[test]
    fn load_term_fills_the_context() {
        let dir = std::env::temp_dir();
        let path = dir.join("vixcalc_quotes_test.dat");
        std::fs::write(&path, "100\t1\t2\t3\t4\n105\t5\t6\t7\t8\n").unwrap();

        let ctx = load_term(Term::Next, &path, 46_394, 0.000286).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ctx.term, Term::Next);
        assert_eq!(ctx.minutes_to_expiry, 46_394);
        assert_eq!(ctx.risk_free_rate, 0.000286);
        assert_eq!(ctx.quotes.len(), 2);
    }
}
