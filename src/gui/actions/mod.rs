// src/gui/actions/mod.rs
//
// Button actions. Layout lives in components/, the work lives here.

mod copy;
mod scan;

pub use copy::copy;
pub use scan::scan;
