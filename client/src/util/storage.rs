//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only glue; on the server every read is empty.

/// Read the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
