// src/lines.rs
//
// Plain records for one run: games, their market lines, and the signals the
// classifier derives from them. Nothing here is mutated after construction.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/* ---------------- League / side ---------------- */

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    Nba,
    Nhl,
    Mlb,
    Nfl,
    Ncaaf,
    /// Men's college basketball
    Ncaam,
}

impl League {
    pub const ALL: [League; 6] = [
        League::Nba,
        League::Nhl,
        League::Mlb,
        League::Nfl,
        League::Ncaaf,
        League::Ncaam,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            League::Nba => "NBA",
            League::Nhl => "NHL",
            League::Mlb => "MLB",
            League::Nfl => "NFL",
            League::Ncaaf => "NCAAF",
            League::Ncaam => "NCAAM",
        }
    }

    /// Match a page label ("NBA", "ncaam", ...). Anything else is not ours.
    pub fn from_label(label: &str) -> Option<League> {
        let label = label.trim();
        League::ALL.into_iter().find(|l| l.label().eq_ignore_ascii_case(label))
    }

    /// Total move (points) worth flagging in totals-only mode.
    /// Scoring scale differs a lot between sports.
    pub fn default_total_threshold(&self) -> f64 {
        match self {
            League::Nba | League::Ncaam => 1.5,
            League::Nhl => 0.5,
            League::Nfl | League::Ncaaf => 2.0,
            League::Mlb => 1.5,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/* ---------------- Game ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    pub league: League,
    pub home: String,
    pub away: String,
    pub start: Option<DateTime<Utc>>,
}

impl Game {
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// "Away @ Home"
    pub fn matchup(&self) -> String {
        join!(&self.away, " @ ", &self.home)
    }

    /// Start time in the operator's local zone, or empty when the page had none.
    pub fn start_text(&self) -> String {
        match self.start {
            Some(t) => t.with_timezone(&Local).format("%Y-%m-%d %I:%M %p").to_string(),
            None => s!(),
        }
    }
}

/* ---------------- Markets ---------------- */

/// Opening and current value of one number. Both are always present;
/// a market missing either value is left out of the snapshot entirely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Movement {
    pub open: f64,
    pub current: f64,
}

impl Movement {
    pub fn new(open: f64, current: f64) -> Self {
        Self { open, current }
    }

    pub fn delta(&self) -> f64 {
        self.current - self.open
    }

    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.current.is_finite()
    }
}

/// Point spread from the favorite's side: negative numbers favor `favorite`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpreadLine {
    pub favorite: Side,
    pub points: Movement,
    /// Implied probability of the favorite's spread price, when posted.
    pub price: Option<Movement>,
}

/// Implied win probability per side. The two sides need not sum to 1 (vig).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MoneylineLine {
    pub home: Movement,
    pub away: Movement,
}

impl MoneylineLine {
    pub fn side(&self, side: Side) -> Movement {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "market", rename_all = "lowercase")]
pub enum MarketLine {
    Spread(SpreadLine),
    Total(Movement),
    Moneyline(MoneylineLine),
}

impl MarketLine {
    pub fn kind(&self) -> MarketKind {
        match self {
            MarketLine::Spread(_) => MarketKind::Spread,
            MarketLine::Total(_) => MarketKind::Total,
            MarketLine::Moneyline(_) => MarketKind::Moneyline,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    Spread,
    Total,
    Moneyline,
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarketKind::Spread => "Spread",
            MarketKind::Total => "Total",
            MarketKind::Moneyline => "Moneyline",
        })
    }
}

/// One game and whatever markets the page published for it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineSnapshot {
    pub game: Game,
    pub markets: Vec<MarketLine>,
}

impl LineSnapshot {
    pub fn new(game: Game) -> Self {
        Self { game, markets: Vec::new() }
    }

    pub fn with_market(mut self, market: MarketLine) -> Self {
        self.markets.push(market);
        self
    }

    pub fn spread(&self) -> Option<&SpreadLine> {
        self.markets.iter().find_map(|m| match m {
            MarketLine::Spread(s) => Some(s),
            _ => None,
        })
    }

    pub fn total(&self) -> Option<&Movement> {
        self.markets.iter().find_map(|m| match m {
            MarketLine::Total(t) => Some(t),
            _ => None,
        })
    }

    pub fn moneyline(&self) -> Option<&MoneylineLine> {
        self.markets.iter().find_map(|m| match m {
            MarketLine::Moneyline(ml) => Some(ml),
            _ => None,
        })
    }
}

/* ---------------- Signals ---------------- */

/// What to back.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "pick", rename_all = "snake_case")]
pub enum Pick {
    /// Favorite got steamed; take the dog at the wider number (positive).
    Underdog { side: Side, line: f64 },
    /// Line drifted toward the dog; take the favorite at the better number.
    Favorite { side: Side, line: f64 },
    Under { total: f64 },
    Over { total: f64 },
    /// Back `side`; `implied` is its current implied probability.
    Moneyline { side: Side, implied: f64 },
}

impl Pick {
    pub fn market(&self) -> MarketKind {
        match self {
            Pick::Underdog { .. } | Pick::Favorite { .. } => MarketKind::Spread,
            Pick::Under { .. } | Pick::Over { .. } => MarketKind::Total,
            Pick::Moneyline { .. } => MarketKind::Moneyline,
        }
    }
}

/// Output of the classifier. `moved` is the movement that fired it, in the
/// market's own frame: favorite spread, total, or the faded side's probability.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrarianSignal {
    pub game: Game,
    pub market: MarketKind,
    pub pick: Pick,
    pub moved: Movement,
    pub magnitude: f64,
}

impl ContrarianSignal {
    pub fn new(game: &Game, pick: Pick, moved: Movement, magnitude: f64) -> Self {
        Self {
            game: game.clone(),
            market: pick.market(),
            pick,
            moved,
            magnitude,
        }
    }
}
