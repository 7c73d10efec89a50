// src/config/options.rs
use std::collections::{BTreeMap, BTreeSet};

use crate::classify::Thresholds;
use crate::error::{Error, Result};
use crate::lines::League;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Spreads, totals and moneylines with the global thresholds.
    AllMarkets,
    /// Totals only, with a threshold per league.
    TotalsOnly,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanOptions {
    pub thresholds: Thresholds,
    pub leagues: BTreeSet<League>,
    pub mode: ScanMode,
    /// Per-league total thresholds used by `TotalsOnly`.
    pub league_totals: BTreeMap<League, f64>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            leagues: League::ALL.into_iter().collect(),
            mode: ScanMode::AllMarkets,
            league_totals: League::ALL
                .into_iter()
                .map(|l| (l, l.default_total_threshold()))
                .collect(),
        }
    }
}

impl ScanOptions {
    /// Reject bad thresholds before anything is fetched.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if self.thresholds.moneyline > 1.0 {
            return Err(Error::invalid(format!(
                "moneyline threshold is a probability change and must be in [0, 1] (got {})",
                self.thresholds.moneyline
            )));
        }
        for (league, v) in &self.league_totals {
            if !v.is_finite() || *v < 0.0 {
                return Err(Error::invalid(format!(
                    "{league} total threshold must be a non-negative number (got {v})"
                )));
            }
        }
        Ok(())
    }

    pub fn allows(&self, league: League) -> bool {
        self.leagues.contains(&league)
    }

    /// Thresholds to classify one league's games with.
    pub fn thresholds_for(&self, league: League) -> Thresholds {
        match self.mode {
            ScanMode::AllMarkets => self.thresholds,
            ScanMode::TotalsOnly => Thresholds {
                total: self
                    .league_totals
                    .get(&league)
                    .copied()
                    .unwrap_or_else(|| league.default_total_threshold()),
                ..self.thresholds
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            _ => None,
        }
    }
}
