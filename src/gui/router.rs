// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::all_markets::PAGE,
    &pages::totals_only::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
