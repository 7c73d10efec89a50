// src/config/state.rs
use super::options::ScanOptions;
use crate::lines::League;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which leagues are selected in the left panel
    pub selected_leagues: Vec<League>,

    /// Active tab index into router::VIEWS
    pub current_view_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_leagues: League::ALL.to_vec(),
            current_view_index: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: ScanOptions,
    pub gui: GuiState,
}
