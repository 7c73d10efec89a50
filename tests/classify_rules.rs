// tests/classify_rules.rs
//
// Classifier rules on hand-built snapshots. No network, no page parsing.

use contrarian_plays::classify::{Thresholds, classify};
use contrarian_plays::error::ErrorKind;
use contrarian_plays::lines::{
    Game, League, LineSnapshot, MarketKind, MarketLine, MoneylineLine, Movement, Pick, Side,
    SpreadLine,
};

fn game(league: League) -> Game {
    Game {
        league,
        home: "Home Team".into(),
        away: "Away Team".into(),
        start: None,
    }
}

fn spread(fav: Side, open: f64, current: f64) -> MarketLine {
    MarketLine::Spread(SpreadLine {
        favorite: fav,
        points: Movement::new(open, current),
        price: None,
    })
}

fn total(open: f64, current: f64) -> MarketLine {
    MarketLine::Total(Movement::new(open, current))
}

fn moneyline(home: (f64, f64), away: (f64, f64)) -> MarketLine {
    MarketLine::Moneyline(MoneylineLine {
        home: Movement::new(home.0, home.1),
        away: Movement::new(away.0, away.1),
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn spread_steam_on_favorite_backs_underdog() {
    let snap = LineSnapshot::new(game(League::Nba)).with_market(spread(Side::Home, -3.0, -4.5));
    let sigs = classify(&snap, &Thresholds::new(1.0, 1.5, 0.05)).unwrap();

    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].market, MarketKind::Spread);
    assert_eq!(sigs[0].pick, Pick::Underdog { side: Side::Away, line: 4.5 });
    assert!(close(sigs[0].magnitude, 1.5));
    assert_eq!(sigs[0].moved, Movement::new(-3.0, -4.5));
}

#[test]
fn spread_drift_toward_dog_backs_favorite() {
    let snap = LineSnapshot::new(game(League::Nfl)).with_market(spread(Side::Away, -7.0, -5.5));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();

    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].pick, Pick::Favorite { side: Side::Away, line: -5.5 });
    assert!(close(sigs[0].magnitude, 1.5));
}

#[test]
fn total_up_backs_under() {
    let snap = LineSnapshot::new(game(League::Nba)).with_market(total(220.0, 221.5));
    let sigs = classify(&snap, &Thresholds::new(1.0, 1.5, 0.05)).unwrap();

    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].pick, Pick::Under { total: 221.5 });
    assert!(close(sigs[0].magnitude, 1.5));
}

#[test]
fn total_down_backs_over() {
    let snap = LineSnapshot::new(game(League::Nfl)).with_market(total(47.5, 44.5));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();

    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].pick, Pick::Over { total: 44.5 });
    assert!(close(sigs[0].magnitude, 3.0));
}

#[test]
fn moneyline_steam_backs_other_side() {
    let snap = LineSnapshot::new(game(League::Mlb))
        .with_market(moneyline((0.60, 0.68), (0.44, 0.36)));
    let sigs = classify(&snap, &Thresholds::new(1.0, 1.5, 0.05)).unwrap();

    assert_eq!(sigs.len(), 1);
    match sigs[0].pick {
        Pick::Moneyline { side, implied } => {
            assert_eq!(side, Side::Away);
            assert!(close(implied, 0.36));
        }
        other => panic!("unexpected pick {other:?}"),
    }
    assert!(close(sigs[0].magnitude, 0.08));
}

#[test]
fn moneyline_sides_are_judged_independently() {
    // Both sides shortening (bad data or vig change): both are reported.
    let snap = LineSnapshot::new(game(League::Nhl))
        .with_market(moneyline((0.50, 0.56), (0.50, 0.57)));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();

    let sides: Vec<Side> = sigs
        .iter()
        .map(|s| match s.pick {
            Pick::Moneyline { side, .. } => side,
            other => panic!("unexpected pick {other:?}"),
        })
        .collect();
    assert_eq!(sides, vec![Side::Away, Side::Home]);
}

#[test]
fn small_spread_move_is_ignored() {
    let snap = LineSnapshot::new(game(League::Nba)).with_market(spread(Side::Home, -3.0, -3.4));
    let sigs = classify(&snap, &Thresholds::new(1.0, 1.5, 0.05)).unwrap();
    assert!(sigs.is_empty());
}

#[test]
fn thresholds_are_inclusive() {
    let t = Thresholds::new(1.0, 1.5, 0.05);

    let up = LineSnapshot::new(game(League::Nba)).with_market(spread(Side::Home, -3.0, -2.0));
    let down = LineSnapshot::new(game(League::Nba)).with_market(spread(Side::Home, -3.0, -4.0));
    assert_eq!(classify(&up, &t).unwrap().len(), 1);
    assert_eq!(classify(&down, &t).unwrap().len(), 1);

    // 0.60 -> 0.65 is 0.05 only up to float error
    let ml = LineSnapshot::new(game(League::Nba)).with_market(moneyline((0.60, 0.65), (0.45, 0.45)));
    assert_eq!(classify(&ml, &t).unwrap().len(), 1);

    let just_under = LineSnapshot::new(game(League::Nba)).with_market(total(200.0, 201.4));
    assert!(classify(&just_under, &t).unwrap().is_empty());

    // Lower total boundary: exactly -1.5 leans Over.
    let total_down = LineSnapshot::new(game(League::Nba)).with_market(total(220.0, 218.5));
    let sigs = classify(&total_down, &t).unwrap();
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].pick, Pick::Over { total: 218.5 });
    assert!(close(sigs[0].magnitude, 1.5));

    // +0.4 toward the dog stays quiet too.
    let small_up = LineSnapshot::new(game(League::Nba)).with_market(spread(Side::Home, -3.0, -2.6));
    assert!(classify(&small_up, &t).unwrap().is_empty());
}

#[test]
fn markets_are_independent_and_ordered() {
    let snap = LineSnapshot::new(game(League::Nba))
        .with_market(moneyline((0.60, 0.67), (0.43, 0.37)))
        .with_market(total(220.0, 220.0))
        .with_market(spread(Side::Home, -3.0, -4.5));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();

    let kinds: Vec<MarketKind> = sigs.iter().map(|s| s.market).collect();
    assert_eq!(kinds, vec![MarketKind::Spread, MarketKind::Moneyline]);
}

#[test]
fn zero_threshold_needs_some_movement() {
    let t = Thresholds::new(0.0, 0.0, 0.0);
    let flat = LineSnapshot::new(game(League::Nba))
        .with_market(spread(Side::Home, -3.0, -3.0))
        .with_market(total(220.0, 220.0))
        .with_market(moneyline((0.6, 0.6), (0.4, 0.4)));
    assert!(classify(&flat, &t).unwrap().is_empty());

    let tick = LineSnapshot::new(game(League::Nba)).with_market(total(220.0, 220.5));
    assert_eq!(classify(&tick, &t).unwrap().len(), 1);
}

#[test]
fn snapshot_without_markets_gives_nothing() {
    let snap = LineSnapshot::new(game(League::Ncaam));
    assert!(classify(&snap, &Thresholds::default()).unwrap().is_empty());
}

#[test]
fn negative_threshold_is_rejected() {
    let snap = LineSnapshot::new(game(League::Nba)).with_market(spread(Side::Home, -3.0, -4.5));
    for t in [
        Thresholds::new(-1.0, 1.5, 0.05),
        Thresholds::new(1.0, -0.1, 0.05),
        Thresholds::new(1.0, 1.5, -0.05),
        Thresholds::new(f64::NAN, 1.5, 0.05),
    ] {
        let err = classify(&snap, &t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn malformed_market_is_rejected() {
    let nan = LineSnapshot::new(game(League::Nba)).with_market(total(f64::NAN, 220.0));
    assert_eq!(
        classify(&nan, &Thresholds::default()).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );

    let not_prob = LineSnapshot::new(game(League::Nba)).with_market(moneyline((1.2, 0.6), (0.4, 0.4)));
    assert_eq!(
        classify(&not_prob, &Thresholds::default()).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
}

/* ---------------- run line / puck line flips ---------------- */

fn flip(price: Option<(f64, f64)>, ml_home: (f64, f64)) -> LineSnapshot {
    LineSnapshot::new(game(League::Mlb))
        .with_market(MarketLine::Spread(SpreadLine {
            favorite: Side::Home,
            points: Movement::new(-1.5, 1.5),
            price: price.map(|(o, c)| Movement::new(o, c)),
        }))
        .with_market(moneyline(ml_home, (0.45, 0.45)))
}

#[test]
fn unconfirmed_run_line_flip_is_noise() {
    // Spread price shortened but the moneyline drifted the other way.
    let snap = flip(Some((0.40, 0.65)), (0.58, 0.52));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();
    assert!(sigs.iter().all(|s| s.market != MarketKind::Spread));

    // No price at all
    let snap = flip(None, (0.58, 0.65));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();
    assert!(sigs.iter().all(|s| s.market != MarketKind::Spread));
}

#[test]
fn confirmed_run_line_flip_counts() {
    // Price and moneyline both moved the same way, past the moneyline threshold.
    let snap = flip(Some((0.40, 0.52)), (0.52, 0.60));
    let sigs = classify(&snap, &Thresholds::default()).unwrap();

    let spread: Vec<_> = sigs.iter().filter(|s| s.market == MarketKind::Spread).collect();
    assert_eq!(spread.len(), 1);
    assert_eq!(spread[0].pick, Pick::Favorite { side: Side::Home, line: 1.5 });
    assert!(close(spread[0].magnitude, 3.0));
}
