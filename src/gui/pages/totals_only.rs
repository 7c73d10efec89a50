// src/gui/pages/totals_only.rs
//
// Totals with a threshold per league. Only the selected leagues get a slider.
use eframe::egui;

use super::{Page, threshold_slider};
use crate::config::{options::ScanMode, state::AppState};

pub struct TotalsOnlyPage;
pub static PAGE: TotalsOnlyPage = TotalsOnlyPage;

impl Page for TotalsOnlyPage {
    fn title(&self) -> &'static str { "Totals only" }
    fn mode(&self) -> ScanMode { ScanMode::TotalsOnly }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut changed = false;
        ui.horizontal_wrapped(|ui| {
            for league in &state.gui.selected_leagues {
                let v = state
                    .options
                    .league_totals
                    .entry(*league)
                    .or_insert_with(|| league.default_total_threshold());
                if threshold_slider(ui, league.label(), v, 10.0, 0.5) {
                    logd!("UI: {} total threshold → {}", league, v);
                    changed = true;
                }
            }
        });
        changed
    }
}
