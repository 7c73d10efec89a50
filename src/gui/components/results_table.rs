// src/gui/components/results_table.rs
//
// Flagged signals, one row each. Purely a view.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

// League, Matchup, Start, Market, Pick, Move
const WIDTHS: [f32; 6] = [60.0, 220.0, 150.0, 80.0, 380.0, 70.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.rows.is_empty() {
        if app.report.is_some() {
            ui.label(crate::present::EMPTY_MESSAGE);
        }
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for (ci, _) in app.headers.iter().enumerate() {
        let w = WIDTHS.get(ci).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in &app.headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let r = &app.rows[row.index()];
                for cell in r {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
