// src/gui/app.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    lines::League,
    present,
    scan::ScanReport,
};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // league list order for the left panel; selection lives in state.gui
    pub leagues: Vec<League>,
    pub last_clicked: Option<usize>,

    // last scan, unfiltered
    pub report: Option<ScanReport>,

    // what the table shows right now
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: leagues={}, default page={}",
            state.gui.selected_leagues.len(),
            router::all_pages()[state.gui.current_view_index].title()
        );
        let mut app = Self {
            state,
            leagues: League::ALL.to_vec(),
            last_clicked: None,
            report: None,
            headers: present::headers(),
            rows: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle: press SCAN to fetch lines"))),
        };
        app.sync_selection_into_options();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_view_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_view_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_selection_message(&self) {
        let n = self.state.gui.selected_leagues.len();
        self.status(format!("Selection: {} league(s), not scanned yet", n));
    }

    /// Mirror GUI selection and tab into the scan options.
    pub fn sync_selection_into_options(&mut self) {
        let opts = &mut self.state.options;
        opts.leagues = self.state.gui.selected_leagues.iter().copied().collect();
        opts.mode = router::all_pages()[self.state.gui.current_view_index].mode();
    }

    /// Rebuild the table from the last report and the current selection.
    pub fn rebuild_view(&mut self) {
        self.rows = match &self.report {
            Some(r) => present::table_rows(&r.only_leagues(&self.state.gui.selected_leagues)),
            None => Vec::new(),
        };
        logd!("View: rows={}", self.rows.len());
    }

    /// Rows currently shown, as TSV with headers.
    pub fn visible_tsv(&self) -> Option<String> {
        let report = self.report.as_ref()?;
        let shown = report.only_leagues(&self.state.gui.selected_leagues);
        if shown.is_empty() {
            return None;
        }
        Some(present::to_delimited(&shown, '\t', true))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("leagues")
            .resizable(false)
            .show(ctx, |ui| {
                components::league_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_buttons::draw(ui, self);

            ui.separator();

            components::results_table::draw(ui, self);
        });
    }
}
