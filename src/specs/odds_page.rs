//! Page reader for the ESPN odds page.
//!
//! Purpose:
//! - Read the page's embedded state (`window['__espnfitt__']={...};`) and turn
//!   each listed event into a [`LineSnapshot`].
//! - Only the six supported leagues are kept; other league blocks are skipped.
//!
//! Shape we rely on (everything else is ignored):
//! ```text
//! page.content.odds.odds[]            league blocks
//!   .displayValue                     "NBA", "NHL", ...
//!   .lines[]                          events
//!     .date                           "2025-01-15T00:30Z"
//!     .competitors[] {homeAway, team.displayName}
//!     .odds[0]
//!       .moneyline  {home,away}.{open,close}.odds
//!       .pointSpread{home,away}.{open,close}.{line,odds}
//!       .total      {over,under}.{open,close}.line
//! ```
//!
//! Non-Responsibilities:
//! - **No networking.** Callers hand in the HTML (see `scan::LineSource`).
//! - **No classification.** A market is emitted only when both its opening and
//!   current values are readable; otherwise it is left out.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::consts::STATE_VAR;
use crate::core::{html, odds};
use crate::error::{Error, Result};
use crate::lines::{
    Game, League, LineSnapshot, MarketLine, MoneylineLine, Movement, Side, SpreadLine,
};

/* ---------------- page state (tolerant) ---------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageState {
    page: Option<PageBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageBlock {
    content: Option<ContentBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentBlock {
    odds: Option<OddsBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OddsBlock {
    #[serde(deserialize_with = "null_as_empty")]
    odds: Vec<LeagueBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LeagueBlock {
    display_value: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    lines: Vec<EventLine>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EventLine {
    date: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    competitors: Vec<Competitor>,
    #[serde(deserialize_with = "null_as_empty")]
    odds: Vec<OddsEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Competitor {
    home_away: Option<String>,
    team: Option<TeamRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TeamRef {
    display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OddsEntry {
    moneyline: Option<TwoWay>,
    point_spread: Option<TwoWay>,
    total: Option<OverUnder>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TwoWay {
    home: Option<OpenClose>,
    away: Option<OpenClose>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OverUnder {
    over: Option<OpenClose>,
    under: Option<OpenClose>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpenClose {
    open: Option<Quote>,
    close: Option<Quote>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Quote {
    #[serde(deserialize_with = "text_or_number")]
    line: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    odds: Option<String>,
}

/// `"lines": null` reads as no lines.
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

/// Prices show up both as "-110" and as -110.
fn text_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl OpenClose {
    fn open_line(&self) -> Option<f64> {
        self.open.as_ref()?.line.as_deref().and_then(odds::parse_point)
    }
    fn close_line(&self) -> Option<f64> {
        self.close.as_ref()?.line.as_deref().and_then(odds::parse_point)
    }
    fn open_prob(&self) -> Option<f64> {
        self.open.as_ref()?.odds.as_deref().and_then(odds::american_to_prob)
    }
    fn close_prob(&self) -> Option<f64> {
        self.close.as_ref()?.odds.as_deref().and_then(odds::american_to_prob)
    }
    fn line_move(&self) -> Option<Movement> {
        Some(Movement::new(self.open_line()?, self.close_line()?))
    }
    fn prob_move(&self) -> Option<Movement> {
        Some(Movement::new(self.open_prob()?, self.close_prob()?))
    }
}

/* ---------------- entry points ---------------- */

/// Parse a full odds page.
pub fn parse_page(doc: &str) -> Result<Vec<LineSnapshot>> {
    let blob = html::window_object(doc, STATE_VAR)
        .ok_or_else(|| Error::parse("could not find the odds state blob"))?;
    logd!("Odds state blob: {} bytes", blob.len());
    parse_state(blob)
}

/// Parse the state JSON on its own (already cut out of the page).
pub fn parse_state(json: &str) -> Result<Vec<LineSnapshot>> {
    let state: PageState = serde_json::from_str(json)?;
    let odds_block = state
        .page
        .and_then(|p| p.content)
        .and_then(|c| c.odds)
        .ok_or_else(|| Error::parse("page state has no odds block"))?;

    let mut out = Vec::new();
    for block in odds_block.odds {
        let label = block.display_value.as_deref().unwrap_or("");
        let Some(league) = League::from_label(label) else {
            logd!("Skipping league block {label:?}");
            continue;
        };
        for line in &block.lines {
            match snapshot_from(league, line) {
                Some(snap) => out.push(snap),
                None => logw!("{league}: event without home/away competitors, skipped"),
            }
        }
    }
    logf!("Parsed {} events", out.len());
    Ok(out)
}

/* ---------------- helpers ---------------- */

fn snapshot_from(league: League, line: &EventLine) -> Option<LineSnapshot> {
    let competitor = |side: &str| {
        line.competitors
            .iter()
            .find(|c| c.home_away.as_deref().is_some_and(|h| h.eq_ignore_ascii_case(side)))
    };
    let home = competitor("home")?;
    let away = competitor("away")?;
    let name = |c: &Competitor, fallback: &str| {
        c.team
            .as_ref()
            .and_then(|t| t.display_name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| s!(fallback))
    };

    let game = Game {
        league,
        home: name(home, "Home"),
        away: name(away, "Away"),
        start: line.date.as_deref().and_then(parse_start),
    };
    let mut snap = LineSnapshot::new(game);

    let Some(entry) = line.odds.first() else {
        return Some(snap);
    };
    if let Some(spread) = entry.point_spread.as_ref().and_then(spread_line) {
        snap.markets.push(MarketLine::Spread(spread));
    }
    if let Some(total) = entry.total.as_ref().and_then(total_line) {
        snap.markets.push(MarketLine::Total(total));
    }
    if let Some(ml) = entry.moneyline.as_ref().and_then(moneyline_line) {
        snap.markets.push(MarketLine::Moneyline(ml));
    }
    Some(snap)
}

/// Favorite = side laying points at open (at close if the open was a pick'em).
fn spread_line(ps: &TwoWay) -> Option<SpreadLine> {
    let home = ps.home.as_ref()?;
    let away = ps.away.as_ref()?;
    let home_pts = home.line_move()?;
    let away_pts = away.line_move()?;

    let favorite = if home_pts.open < 0.0 {
        Side::Home
    } else if home_pts.open > 0.0 {
        Side::Away
    } else if away_pts.current < 0.0 {
        Side::Away
    } else {
        Side::Home
    };
    let (points, price) = match favorite {
        Side::Home => (home_pts, home.prob_move()),
        Side::Away => (away_pts, away.prob_move()),
    };
    Some(SpreadLine { favorite, points, price })
}

fn total_line(t: &OverUnder) -> Option<Movement> {
    t.over
        .as_ref()
        .and_then(OpenClose::line_move)
        .or_else(|| t.under.as_ref().and_then(OpenClose::line_move))
}

fn moneyline_line(ml: &TwoWay) -> Option<MoneylineLine> {
    Some(MoneylineLine {
        home: ml.home.as_ref()?.prob_move()?,
        away: ml.away.as_ref()?.prob_move()?,
    })
}

/// "2025-01-15T00:30:00Z" or the page's short "2025-01-15T00:30Z".
fn parse_start(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|n| n.and_utc())
}
