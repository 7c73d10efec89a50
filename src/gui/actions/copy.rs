// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(txt) = app.visible_tsv() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    logf!("Copy: rows={}", app.rows.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
