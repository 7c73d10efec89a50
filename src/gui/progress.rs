// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::lines::League;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    flagged: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, flagged: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        // A poisoned lock still holds a usable String.
        let mut guard = self.status.lock().unwrap_or_else(|e| e.into_inner());
        *guard = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, league: League, flagged: bool) {
        self.done += 1;
        if flagged {
            self.flagged += 1;
        }
        self.set_status(format!("Checked {} game ({}/{})", league, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Scan complete")); // no counts if we never began
        } else {
            self.set_status(format!(
                "Scan complete: {} of {} games flagged",
                self.flagged, self.total
            ));
        }
    }
}
