// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod lines;
pub mod present;
pub mod progress;
pub mod scan;
pub mod specs;

pub use error::{Error, Result};
