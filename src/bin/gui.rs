// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use contrarian_plays::config::consts::{APP_TITLE, WINDOW_H, WINDOW_W};
use contrarian_plays::{gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    let _guard = log::init(log::LogTarget::File);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
