//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, alerts) from page and
//! component logic so the rest of the crate stays testable natively.

pub mod alert;
pub mod session;
pub mod storage;
