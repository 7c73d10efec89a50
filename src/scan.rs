// src/scan.rs
//
// fetch -> parse -> classify -> group. The one pipeline both frontends run.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::{
    classify::classify,
    config::options::{ScanMode, ScanOptions},
    core::net,
    error::{Error, Result},
    lines::{ContrarianSignal, Game, League, LineSnapshot, MarketKind},
    progress::Progress,
    specs::odds_page,
};

/// Where snapshots come from. One attempt per call; no retry.
pub trait LineSource {
    /// Human-readable origin for status lines ("https://...", "saved page ...").
    fn describe(&self) -> String;

    fn snapshots(&self) -> Result<Vec<LineSnapshot>>;
}

/// The live odds page.
pub struct EspnOdds {
    pub url: String,
}

impl EspnOdds {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for EspnOdds {
    fn default() -> Self {
        Self::new(crate::config::consts::ODDS_URL)
    }
}

impl LineSource for EspnOdds {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn snapshots(&self) -> Result<Vec<LineSnapshot>> {
        let doc = net::http_get(&self.url)?;
        odds_page::parse_page(&doc)
    }
}

/// A copy of the odds page saved to disk.
pub struct SavedPage {
    pub path: PathBuf,
}

impl LineSource for SavedPage {
    fn describe(&self) -> String {
        format!("saved page {}", self.path.display())
    }

    fn snapshots(&self) -> Result<Vec<LineSnapshot>> {
        let doc = fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;
        odds_page::parse_page(&doc)
    }
}

/* ---------------- report ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReport {
    pub game: Game,
    pub signals: Vec<ContrarianSignal>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeagueReport {
    pub league: League,
    pub games: Vec<GameReport>,
}

/// Flagged games grouped by league, leagues in `League` order,
/// games in page order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScanReport {
    /// Games in the allowed leagues, flagged or not.
    pub games_seen: usize,
    pub leagues: Vec<LeagueReport>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    pub fn signal_count(&self) -> usize {
        self.signals().count()
    }

    pub fn game_count(&self) -> usize {
        self.leagues.iter().map(|l| l.games.len()).sum()
    }

    pub fn signals(&self) -> impl Iterator<Item = &ContrarianSignal> {
        self.leagues
            .iter()
            .flat_map(|l| &l.games)
            .flat_map(|g| &g.signals)
    }

    pub fn league(&self, league: League) -> Option<&LeagueReport> {
        self.leagues.iter().find(|l| l.league == league)
    }

    /// Copy of the report restricted to `leagues` (view-time filtering).
    pub fn only_leagues(&self, leagues: &[League]) -> ScanReport {
        ScanReport {
            games_seen: self.games_seen,
            leagues: self
                .leagues
                .iter()
                .filter(|l| leagues.contains(&l.league))
                .cloned()
                .collect(),
        }
    }
}

/* ---------------- pipeline ---------------- */

pub fn scan(
    source: &dyn LineSource,
    options: &ScanOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScanReport> {
    // Fail fast: bad thresholds never cost a fetch.
    options.validate()?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}…", source.describe()));
    }
    logf!("Scan: begin source={} mode={:?}", source.describe(), options.mode);

    // Reborrow with a short object lifetime so `progress` is usable again below.
    let result = match source.snapshots() {
        Ok(snaps) => classify_all(
            &snaps,
            options,
            progress.as_deref_mut().map(|p| p as &mut dyn Progress),
        ),
        Err(e) => Err(e),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match &result {
        Ok(r) => logf!(
            "Scan: OK games={} flagged={} signals={}",
            r.games_seen,
            r.game_count(),
            r.signal_count()
        ),
        Err(e) => loge!("Scan: {e}"),
    }
    result
}

/// Classify already-parsed snapshots. No I/O.
pub fn classify_all(
    snapshots: &[LineSnapshot],
    options: &ScanOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScanReport> {
    options.validate()?;

    let allowed: Vec<&LineSnapshot> = snapshots
        .iter()
        .filter(|s| options.allows(s.game.league))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(allowed.len());
    }

    let mut by_league: BTreeMap<League, Vec<GameReport>> = BTreeMap::new();
    for snap in &allowed {
        let league = snap.game.league;
        let mut signals = classify(snap, &options.thresholds_for(league))?;
        if options.mode == ScanMode::TotalsOnly {
            signals.retain(|s| s.market == MarketKind::Total);
        }

        let flagged = !signals.is_empty();
        if flagged {
            logd!("{league}: {} flagged ({} signals)", snap.game.matchup(), signals.len());
            by_league.entry(league).or_default().push(GameReport {
                game: snap.game.clone(),
                signals,
            });
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(league, flagged);
        }
    }

    Ok(ScanReport {
        games_seen: allowed.len(),
        leagues: by_league
            .into_iter()
            .map(|(league, games)| LeagueReport { league, games })
            .collect(),
    })
}
