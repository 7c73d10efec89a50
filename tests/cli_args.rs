// tests/cli_args.rs
//
// Flag parsing and the saved-page path through cli::run. No network.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use contrarian_plays::cli::{self, Args};
use contrarian_plays::config::options::{OutputFormat, ScanMode};
use contrarian_plays::lines::League;

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("contrarian_{}", name));
    let _ = fs::remove_file(&p);
    p
}

fn fixture() -> String {
    format!("{}/tests/fixtures/odds_page.html", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn defaults() {
    let args = Args::try_parse_from(["contrarian-cli"]).unwrap();
    let opts = args.to_options();

    assert_eq!(opts.thresholds.spread, 1.0);
    assert_eq!(opts.thresholds.total, 1.5);
    assert_eq!(opts.thresholds.moneyline, 0.05);
    assert_eq!(opts.leagues.len(), League::ALL.len());
    assert_eq!(opts.mode, ScanMode::AllMarkets);
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn leagues_and_mode() {
    let args = Args::try_parse_from([
        "contrarian-cli", "--league", "nba,NHL", "-l", "mlb", "--totals-only",
        "--spread-threshold", "2", "--format", "json",
    ])
    .unwrap();
    let opts = args.to_options();

    let leagues: Vec<League> = opts.leagues.iter().copied().collect();
    assert_eq!(leagues, vec![League::Nba, League::Nhl, League::Mlb]);
    assert_eq!(opts.mode, ScanMode::TotalsOnly);
    assert_eq!(opts.thresholds.spread, 2.0);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn bad_thresholds_are_usage_errors() {
    for argv in [
        vec!["contrarian-cli", "--spread-threshold", "-1"],
        vec!["contrarian-cli", "--total-threshold", "abc"],
        vec!["contrarian-cli", "--moneyline-threshold", "1.5"],
        vec!["contrarian-cli", "--league", "wnba"],
    ] {
        let err = Args::try_parse_from(argv.iter().copied()).unwrap_err();
        assert_eq!(err.exit_code(), 2, "{argv:?}");
    }
}

#[test]
fn run_writes_report_from_saved_page() {
    let out = tmp("run.csv");
    let input = fixture();
    let out_s = out.to_string_lossy().into_owned();
    let args = Args::try_parse_from([
        "contrarian-cli", "--input", input.as_str(), "--format", "csv",
        "-o", out_s.as_str(),
    ])
    .unwrap();

    cli::run(&args).unwrap();

    let csv = fs::read_to_string(&out).unwrap();
    assert_eq!(csv.lines().count(), 1 + 5);
    assert!(csv.lines().any(|l| l.contains("Toronto Maple Leafs @ Boston Bruins")));
}

#[test]
fn run_reports_missing_input() {
    let args = Args::try_parse_from(["contrarian-cli", "--input", "no/such/page.html"]).unwrap();
    let err = cli::run(&args).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}
