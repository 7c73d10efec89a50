// src/specs/mod.rs
//! # Page “specs”
//!
//! Each spec knows how to read **one remote page** and hand back plain records.
//!
//! ## What lives here
//! - Locating the page's data (embedded state blob, tables, ...).
//! - Tolerant decoding: missing or oddly typed fields are skipped, not fatal,
//!   unless the page as a whole is unrecognizable.
//! - Shaping into [`crate::lines::LineSnapshot`]s.
//!
//! ## What does **not** live here
//! - Networking (`core::net`, `scan::LineSource`).
//! - Deciding what is interesting (`classify`).
//! - Formatting (`present`, `gui`).
//!
//! ## Testing notes
//! Specs are tested offline against saved pages (`tests/fixtures/`).
pub mod odds_page;
