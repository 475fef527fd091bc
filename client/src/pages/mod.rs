//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Both entity pages are thin instantiations of `entity_page`, which owns
//! the load/save/delete orchestration and delegates rendering to
//! `components`.

pub mod contacts;
pub(crate) mod entity_page;
pub mod users;
