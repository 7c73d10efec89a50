// src/gui/components/league_panel.rs
//
// Left league list. Click selects one, ctrl toggles, shift selects a range,
// ctrl+shift extends. The table re-filters immediately; new leagues need a SCAN.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Leagues");

    let apply_selection_change = |app: &mut App| {
        app.sync_selection_into_options();
        app.rebuild_view();
        app.set_selection_message();
    };

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_leagues = app.leagues.clone();
            apply_selection_change(app);
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_leagues.clear();
            apply_selection_change(app);
        }
    });

    ui.separator();

    let mut changed = false;
    for (idx, league) in app.leagues.iter().enumerate() {
        let is_selected = app.state.gui.selected_leagues.contains(league);
        let resp = ui.selectable_label(is_selected, league.label());

        if resp.clicked() {
            let modifiers = ui.input(|i| i.modifiers);
            let sel = &mut app.state.gui.selected_leagues;

            match (modifiers.ctrl, modifiers.shift, app.last_clicked) {
                (true, true, Some(last)) => {
                    let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                    for l in &app.leagues[lo..=hi] {
                        if !sel.contains(l) { sel.push(*l); }
                    }
                }
                (_, true, Some(last)) => {
                    let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                    sel.clear();
                    sel.extend_from_slice(&app.leagues[lo..=hi]);
                }
                (true, _, _) => {
                    if is_selected { sel.retain(|l| l != league); } else { sel.push(*league); }
                }
                // Plain click, or shift with no anchor
                _ => {
                    sel.clear();
                    sel.push(*league);
                }
            }
            // Panel order, so the options set and the table agree
            sel.sort();
            app.last_clicked = Some(idx);
            changed = true;
        }
    }

    if changed {
        apply_selection_change(app);
        logf!(
            "UI: Selection changed ({} leagues) {:?}",
            app.state.gui.selected_leagues.len(),
            &app.state.gui.selected_leagues
        );
    }
}
