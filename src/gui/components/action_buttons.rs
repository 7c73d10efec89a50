// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy visible rows as TSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scan = ui.add_enabled(
            !app.state.gui.selected_leagues.is_empty(),
            egui::Button::new(
                egui::RichText::new("SCAN")
                .color(black)
                .strong())
            .fill(red));

        if button_scan.clicked() {
            actions::scan(app);
        }

        ui.label(app.status_text());
    });
}
