// src/cli.rs
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::classify::Thresholds;
use crate::config::consts::{
    DEFAULT_MONEYLINE_THRESHOLD, DEFAULT_SPREAD_THRESHOLD, DEFAULT_TOTAL_THRESHOLD, ODDS_URL,
};
use crate::config::options::{OutputFormat, ScanMode, ScanOptions};
use crate::error::{Error, Result};
use crate::lines::League;
use crate::present;
use crate::progress::Progress;
use crate::scan::{self, EspnOdds, LineSource, SavedPage};

/// Flag games whose lines moved against the public.
#[derive(Debug, Parser)]
#[command(name = "contrarian-cli", version, about)]
pub struct Args {
    /// Minimum spread move, in points.
    #[arg(long, env = "CONTRARIAN_SPREAD_THRESHOLD",
          default_value_t = DEFAULT_SPREAD_THRESHOLD, value_parser = non_negative)]
    pub spread_threshold: f64,

    /// Minimum total move, in points.
    #[arg(long, env = "CONTRARIAN_TOTAL_THRESHOLD",
          default_value_t = DEFAULT_TOTAL_THRESHOLD, value_parser = non_negative)]
    pub total_threshold: f64,

    /// Minimum implied-probability move (0.05 = 5 percentage points).
    #[arg(long, env = "CONTRARIAN_MONEYLINE_THRESHOLD",
          default_value_t = DEFAULT_MONEYLINE_THRESHOLD, value_parser = probability)]
    pub moneyline_threshold: f64,

    /// Only these leagues (comma separated). Default: all.
    #[arg(short, long = "league", value_enum, value_delimiter = ',', ignore_case = true)]
    pub leagues: Vec<League>,

    /// Totals only, with the per-league total thresholds.
    #[arg(long)]
    pub totals_only: bool,

    /// Odds page to fetch.
    #[arg(long, env = "CONTRARIAN_ODDS_URL", default_value = ODDS_URL)]
    pub url: String,

    /// Read a saved copy of the odds page instead of fetching (wins over --url).
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

fn non_negative(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("not a number: {s}"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("must be a non-negative number (got {s})"));
    }
    Ok(v)
}

fn probability(s: &str) -> std::result::Result<f64, String> {
    let v = non_negative(s)?;
    if v > 1.0 {
        return Err(format!("must be in [0, 1] (got {s})"));
    }
    Ok(v)
}

impl Args {
    pub fn to_options(&self) -> ScanOptions {
        let mut opts = ScanOptions {
            thresholds: Thresholds::new(
                self.spread_threshold,
                self.total_threshold,
                self.moneyline_threshold,
            ),
            ..ScanOptions::default()
        };
        if !self.leagues.is_empty() {
            opts.leagues = self.leagues.iter().copied().collect();
        }
        if self.totals_only {
            opts.mode = ScanMode::TotalsOnly;
        }
        opts
    }

    fn source(&self) -> Box<dyn LineSource> {
        match &self.input {
            Some(path) => Box::new(SavedPage { path: path.clone() }),
            None => Box::new(EspnOdds::new(self.url.clone())),
        }
    }
}

/// Status lines on stderr so stdout stays clean for the report.
struct StderrProgress {
    total: usize,
    done: usize,
    flagged: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _league: League, flagged: bool) {
        self.done += 1;
        if flagged {
            self.flagged += 1;
        }
    }
    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Checked {}/{} games, {} flagged.", self.done, self.total, self.flagged);
        }
    }
}

pub fn run(args: &Args) -> Result<()> {
    let options = args.to_options();
    let source = args.source();
    let mut progress = StderrProgress { total: 0, done: 0, flagged: 0 };

    let report = scan::scan(source.as_ref(), &options, Some(&mut progress))?;
    let text = present::render(&report, args.format)?;

    match &args.out {
        Some(path) => {
            fs::write(path, text).map_err(Error::Output)?;
            logf!("Wrote {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
