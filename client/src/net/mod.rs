//! REST access to the admin backend.

pub mod api;
