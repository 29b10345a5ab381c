//! Command-line front end: compute the index value from two quote files.
//!
//! The defaults reproduce the published worked example when pointed at its
//! near-/next-term data files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use vixcalc::quotes;
use vixcalc::{Term, TermReport};

/// Compute a 30-day volatility index value from near- and next-term option
/// quote chains.
#[derive(Parser)]
#[command(name = "vix", version, about)]
struct Cli {
    /// Near-term quote file (tab-separated: strike, call bid, call ask, put bid, put ask)
    near_file: PathBuf,

    /// Next-term quote file, same format
    next_file: PathBuf,

    /// Minutes to the near-term expiration
    #[arg(long, default_value_t = 35_924)]
    near_minutes: u32,

    /// Minutes to the next-term expiration
    #[arg(long, default_value_t = 46_394)]
    next_minutes: u32,

    /// Near-term risk-free rate (annualized)
    #[arg(long, default_value_t = 0.000305)]
    near_rate: f64,

    /// Next-term risk-free rate (annualized)
    #[arg(long, default_value_t = 0.000286)]
    next_rate: f64,

    /// 0 = result only, 1 = per-term diagnostics, 2 = full selection detail
    #[arg(long, short, default_value_t = 0)]
    verbose: u8,
}

fn print_term_summary(report: &TermReport) {
    println!(
        "{}: Nt={} T={:.9} F={:.6} K0={} sigma^2={:.9}",
        report.term,
        report.minutes_to_expiry,
        report.year_fraction,
        report.forward.0,
        report.atm_strike,
        report.sigma_squared.0,
    );
}

fn print_term_detail(report: &TermReport) {
    println!("selected options ({}):", report.term);
    for c in &report.contributions {
        println!(
            "  {:>10} {:<7?} mid={:<10} deltaK={:<8} contribution={:.12}",
            c.strike, c.kind, c.mid_price, c.delta_k, c.contribution,
        );
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let near = quotes::load_term(Term::Near, &cli.near_file, cli.near_minutes, cli.near_rate)
        .context("loading near-term quotes")?;
    let next = quotes::load_term(Term::Next, &cli.next_file, cli.next_minutes, cli.next_rate)
        .context("loading next-term quotes")?;

    let report = vixcalc::evaluate(&near, &next)?;

    if cli.verbose >= 1 {
        print_term_summary(&report.near);
        print_term_summary(&report.next);
    }
    if cli.verbose >= 2 {
        print_term_detail(&report.near);
        print_term_detail(&report.next);
    }
    println!("VIX: {}", report.value.0);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
