// src/classify.rs
//! Line-movement classifier.
//!
//! Pure: takes one [`LineSnapshot`] and three thresholds, returns the
//! contrarian signals the numbers imply. No I/O, no state.
//!
//! Movement is always `current - open`. Thresholds are inclusive, and each
//! market (and each moneyline side) is judged on its own.

use crate::config::consts::{
    DEFAULT_MONEYLINE_THRESHOLD, DEFAULT_SPREAD_THRESHOLD, DEFAULT_TOTAL_THRESHOLD, EPSILON,
    RUN_LINE,
};
use crate::error::{Error, Result};
use crate::lines::{
    ContrarianSignal, LineSnapshot, MarketLine, MoneylineLine, Movement, Pick, Side, SpreadLine,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Points
    pub spread: f64,
    /// Points
    pub total: f64,
    /// Implied probability, 0.05 = 5pp
    pub moneyline: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            spread: DEFAULT_SPREAD_THRESHOLD,
            total: DEFAULT_TOTAL_THRESHOLD,
            moneyline: DEFAULT_MONEYLINE_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(spread: f64, total: f64, moneyline: f64) -> Self {
        Self { spread, total, moneyline }
    }

    /// Negative or non-finite thresholds are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("spread", self.spread),
            ("total", self.total),
            ("moneyline", self.moneyline),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::invalid(format!(
                    "{name} threshold must be a non-negative number (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// `delta` moved up by at least `threshold` (and actually moved).
#[inline]
fn rose_by(delta: f64, threshold: f64) -> bool {
    delta > EPSILON && delta + EPSILON >= threshold
}

/// `delta` moved down by at least `threshold` (and actually moved).
#[inline]
fn fell_by(delta: f64, threshold: f64) -> bool {
    rose_by(-delta, threshold)
}

pub fn classify(snapshot: &LineSnapshot, thresholds: &Thresholds) -> Result<Vec<ContrarianSignal>> {
    thresholds.validate()?;
    for market in &snapshot.markets {
        check_market(market)?;
    }

    let mut out = Vec::new();
    if let Some(spread) = snapshot.spread() {
        spread_signal(snapshot, spread, thresholds, &mut out);
    }
    if let Some(total) = snapshot.total() {
        total_signal(snapshot, total, thresholds.total, &mut out);
    }
    if let Some(ml) = snapshot.moneyline() {
        moneyline_signals(snapshot, ml, thresholds.moneyline, &mut out);
    }
    Ok(out)
}

fn check_market(market: &MarketLine) -> Result<()> {
    let ok = match market {
        MarketLine::Spread(s) => s.points.is_finite() && s.price.is_none_or(|p| is_probability(&p)),
        MarketLine::Total(t) => t.is_finite(),
        MarketLine::Moneyline(ml) => is_probability(&ml.home) && is_probability(&ml.away),
    };
    if ok {
        Ok(())
    } else {
        Err(Error::invalid(format!("malformed {} market: {market:?}", market.kind())))
    }
}

fn is_probability(m: &Movement) -> bool {
    m.is_finite() && (0.0..=1.0).contains(&m.open) && (0.0..=1.0).contains(&m.current)
}

fn spread_signal(
    snapshot: &LineSnapshot,
    spread: &SpreadLine,
    thresholds: &Thresholds,
    out: &mut Vec<ContrarianSignal>,
) {
    let delta = if is_run_line_flip(&spread.points) {
        confirmed_flip_delta(spread, snapshot.moneyline(), thresholds.moneyline)
    } else {
        spread.points.delta()
    };

    let fav = spread.favorite;
    if fell_by(delta, thresholds.spread) {
        // Favorite steamed further; the dog gets the wider number.
        let pick = Pick::Underdog { side: fav.other(), line: -spread.points.current };
        out.push(ContrarianSignal::new(&snapshot.game, pick, spread.points, -delta));
    } else if rose_by(delta, thresholds.spread) {
        let pick = Pick::Favorite { side: fav, line: spread.points.current };
        out.push(ContrarianSignal::new(&snapshot.game, pick, spread.points, delta));
    }
}

/// -1.5 at open, +1.5 now (or the reverse): the page may just be showing the
/// other side of a fixed run/puck line.
fn is_run_line_flip(points: &Movement) -> bool {
    points.open.abs() == RUN_LINE && points.current.abs() == RUN_LINE && points.open == -points.current
}

/// A flip only counts when the spread price moved past the moneyline
/// threshold and the moneyline moved the same way for the same side.
fn confirmed_flip_delta(spread: &SpreadLine, ml: Option<&MoneylineLine>, ml_threshold: f64) -> f64 {
    let (Some(price), Some(ml)) = (spread.price, ml) else {
        logd!("Run line flip without price/moneyline; treating as noise");
        return 0.0;
    };
    let price_shift = price.delta();
    let ml_shift = ml.side(spread.favorite).delta();

    if price_shift.abs() + EPSILON >= ml_threshold && price_shift * ml_shift > 0.0 {
        spread.points.delta()
    } else {
        logd!(
            "Run line flip not confirmed (price {:+.3}, moneyline {:+.3})",
            price_shift,
            ml_shift
        );
        0.0
    }
}

fn total_signal(snapshot: &LineSnapshot, total: &Movement, threshold: f64, out: &mut Vec<ContrarianSignal>) {
    let delta = total.delta();
    if rose_by(delta, threshold) {
        let pick = Pick::Under { total: total.current };
        out.push(ContrarianSignal::new(&snapshot.game, pick, *total, delta));
    } else if fell_by(delta, threshold) {
        let pick = Pick::Over { total: total.current };
        out.push(ContrarianSignal::new(&snapshot.game, pick, *total, -delta));
    }
}

/// Each side on its own: money coming in on one side means back the other.
/// Both may fire on inconsistent data; that is reported, not resolved.
fn moneyline_signals(
    snapshot: &LineSnapshot,
    ml: &MoneylineLine,
    threshold: f64,
    out: &mut Vec<ContrarianSignal>,
) {
    for steamed in [Side::Home, Side::Away] {
        let moved = ml.side(steamed);
        let delta = moved.delta();
        if rose_by(delta, threshold) {
            let back = steamed.other();
            let pick = Pick::Moneyline { side: back, implied: ml.side(back).current };
            out.push(ContrarianSignal::new(&snapshot.game, pick, moved, delta));
        }
    }
}
