// src/gui/actions/scan.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    scan::{self, EspnOdds},
};

/// One fetch + classify + render cycle. Blocks the UI thread for the fetch.
pub fn scan(app: &mut App) {
    app.sync_selection_into_options();
    let page = app.current_page();

    logf!(
        "Scan: Begin page={} leagues={:?}",
        page.title(),
        app.state.options.leagues
    );

    let mut prog = GuiProgress::new(app.status.clone());
    let source = EspnOdds::default();

    match scan::scan(&source, &app.state.options, Some(&mut prog)) {
        Ok(report) => {
            app.report = Some(report);
            app.rebuild_view();
            if app.rows.is_empty() {
                app.status(crate::present::EMPTY_MESSAGE);
            }
        }
        Err(e) => {
            loge!("Scan: Error page={}: {}", page.title(), e);
            app.status(format!("Error: {e}"));
        }
    }
}
