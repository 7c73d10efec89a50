// src/gui/pages/all_markets.rs
use eframe::egui;

use super::{Page, threshold_slider};
use crate::config::{options::ScanMode, state::AppState};

pub struct AllMarketsPage;
pub static PAGE: AllMarketsPage = AllMarketsPage;

impl Page for AllMarketsPage {
    fn title(&self) -> &'static str { "All markets" }
    fn mode(&self) -> ScanMode { ScanMode::AllMarkets }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let t = &mut state.options.thresholds;
        let mut changed = false;
        changed |= threshold_slider(ui, "Spread (pts)", &mut t.spread, 10.0, 0.5);
        changed |= threshold_slider(ui, "Total (pts)", &mut t.total, 15.0, 0.5);
        changed |= threshold_slider(ui, "Moneyline (prob)", &mut t.moneyline, 0.5, 0.01);
        if changed {
            logd!("UI: thresholds → {:?}", t);
        }
        changed
    }
}
