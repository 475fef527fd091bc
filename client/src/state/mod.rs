//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data mutated through `RwSignal::update`, so every
//! transition is testable without a browser.

pub mod dialog;
pub mod listing;
pub mod viewer;
