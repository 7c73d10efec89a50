// src/config/consts.rs

// Net config
pub const ODDS_URL: &str = "https://www.espn.com/sports-betting/odds";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Page state blob: window['__espnfitt__']={...};
pub const STATE_VAR: &str = "__espnfitt__";

// Thresholds
pub const DEFAULT_SPREAD_THRESHOLD: f64 = 1.0; // points
pub const DEFAULT_TOTAL_THRESHOLD: f64 = 1.5; // points
pub const DEFAULT_MONEYLINE_THRESHOLD: f64 = 0.05; // implied probability (5pp)

// MLB run line / NHL puck line
pub const RUN_LINE: f64 = 1.5;

// Float slack for inclusive threshold checks
pub const EPSILON: f64 = 1e-9;

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "warn,contrarian_plays=info";

// GUI
pub const APP_TITLE: &str = "Contrarian Plays";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
