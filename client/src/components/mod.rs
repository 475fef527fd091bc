//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from state signals and report user intent through
//! callbacks; pages own the network side effects.

pub mod delete_dialog;
pub mod edit_dialog;
pub mod entity_table;
pub mod nav_bar;
