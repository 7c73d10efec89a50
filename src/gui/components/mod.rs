// src/gui/components/mod.rs
pub mod action_buttons;
pub mod league_panel;
pub mod results_table;
pub mod tabs;
