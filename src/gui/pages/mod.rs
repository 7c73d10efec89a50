// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::{options::ScanMode, state::AppState};

pub mod all_markets;
pub mod totals_only;

/// One tab. A page picks the scan mode and draws its own threshold controls.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn mode(&self) -> ScanMode;

    /// Draw controls above the table. Returns true if any value changed.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool {
        false
    }
}

/// Labeled slider starting at 0. Shared by the pages.
pub(crate) fn threshold_slider(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f64,
    max: f64,
    step: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::Slider::new(value, 0.0..=max).step_by(step).fixed_decimals(if step < 0.1 { 2 } else { 1 }))
            .changed()
    })
    .inner
}
