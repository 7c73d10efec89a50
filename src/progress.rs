// src/progress.rs
use crate::lines::League;

/// Progress reporting for a scan (fetch, parse, classify).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the snapshots are in, with how many there are.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One game classified; `flagged` if it produced any signal.
    fn item_done(&mut self, _league: League, _flagged: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
