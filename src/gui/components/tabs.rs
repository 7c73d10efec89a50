// src/gui/components/tabs.rs
//
// Top tabs. Switching a tab switches the scan mode; results from the other
// mode stay on screen until the next SCAN.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page().title();
                app.set_current_index(idx);
                logf!("UI: Tab switch {} → {}", prev, page.title());

                app.sync_selection_into_options();
                if app.report.is_some() {
                    app.status(format!("{}: press SCAN to refresh", page.title()));
                }
            }
        }
    });

    // Page-specific controls
    let page = app.current_page();
    if page.draw_controls(ui, &mut app.state) {
        if let Err(e) = app.state.options.validate() {
            app.status(format!("Error: {e}"));
        }
    }
}
