// src/present.rs
//
// Report -> text. Formatting only; every decision was made by the classifier.

use std::io::{self, Write};

use crate::config::options::OutputFormat;
use crate::core::odds::{fmt_american, prob_to_american};
use crate::error::Result;
use crate::lines::{ContrarianSignal, MarketKind, Pick};
use crate::scan::ScanReport;

pub const HEADERS: [&str; 6] = ["League", "Matchup", "Start", "Market", "Pick", "Move"];

pub const EMPTY_MESSAGE: &str = "No contrarian candidates found.";

/* ---------------- one signal ---------------- */

/// One-line recommendation, e.g.
/// `Celtics +4.5 (spread moved -1.5 from -3.0 on Lakers)`.
pub fn describe(sig: &ContrarianSignal) -> String {
    let g = &sig.game;
    let m = sig.moved;
    match sig.pick {
        Pick::Underdog { side, line } => format!(
            "{} {:+.1} (spread moved {:.1} from {:+.1} on {})",
            g.team(side),
            line,
            m.delta(),
            m.open,
            g.team(side.other())
        ),
        Pick::Favorite { side, line } => format!(
            "{} {:+.1} (spread moved +{:.1} from {:+.1} vs {})",
            g.team(side),
            line,
            m.delta(),
            m.open,
            g.team(side.other())
        ),
        Pick::Under { total } => format!(
            "Under {:.1} (total up {:.1} from {:.1})",
            total, sig.magnitude, m.open
        ),
        Pick::Over { total } => format!(
            "Over {:.1} (total down {:.1} from {:.1})",
            total, sig.magnitude, m.open
        ),
        Pick::Moneyline { side, implied } => {
            let price = prob_to_american(implied)
                .map(fmt_american)
                .unwrap_or_else(|| format!("{:.0}%", implied * 100.0));
            format!(
                "{} ML {} (fade steam on {}, +{:.1}pp)",
                g.team(side),
                price,
                g.team(side.other()),
                sig.magnitude * 100.0
            )
        }
    }
}

/// Movement magnitude with its unit: "1.5 pts" or "8.0pp".
pub fn magnitude_text(sig: &ContrarianSignal) -> String {
    match sig.market {
        MarketKind::Spread | MarketKind::Total => format!("{:.1} pts", sig.magnitude),
        MarketKind::Moneyline => format!("{:.1}pp", sig.magnitude * 100.0),
    }
}

/* ---------------- whole report ---------------- */

/// Human-readable listing, grouped by league.
pub fn render_text(report: &ScanReport) -> String {
    if report.is_empty() {
        return join!(EMPTY_MESSAGE, "\n");
    }
    let mut out = s!();
    for league in &report.leagues {
        out.push_str(&format!("\n=== {} ===\n", league.league));
        for game in &league.games {
            let start = game.game.start_text();
            if start.is_empty() {
                out.push_str(&format!("- {}\n", game.game.matchup()));
            } else {
                out.push_str(&format!("- {} ({})\n", game.game.matchup(), start));
            }
            for sig in &game.signals {
                out.push_str(&format!("    • {}\n", describe(sig)));
            }
        }
    }
    out
}

/// Flat table: one row per signal, columns as in [`HEADERS`].
pub fn table_rows(report: &ScanReport) -> Vec<Vec<String>> {
    report
        .signals()
        .map(|sig| {
            vec![
                sig.game.league.to_string(),
                sig.game.matchup(),
                sig.game.start_text(),
                sig.market.to_string(),
                describe(sig),
                magnitude_text(sig),
            ]
        })
        .collect()
}

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Delimited export (Copy/CLI). Header line optional.
pub fn to_delimited(report: &ScanReport, sep: char, include_headers: bool) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writing into a Vec can't fail.
    if include_headers {
        let _ = write_row(&mut buf, &headers(), sep);
    }
    for row in table_rows(report) {
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(report)?;
            s.push('\n');
            s
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = format.delim().unwrap_or(',');
            to_delimited(report, sep, true)
        }
    })
}
