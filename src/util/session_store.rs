//! Injected key/value persistence backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store records the logged-in user's identity and per-session
//! preferences across page reloads. Components receive it through context as
//! an explicit capability so ownership and test doubles stay visible.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Store key whose non-empty value marks the session as logged in.
pub const EMAIL_KEY: &str = "email";
/// Store key holding the selected execution-library token.
pub const LIBRARY_KEY: &str = "Library";

/// Key/value persistence surviving page reloads.
///
/// Writes are last-write-wins per key; the UI event loop is the only writer.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
    /// Remove every key in the store.
    fn clear(&self);
    /// Number of keys currently stored.
    fn len(&self) -> usize;
    /// True when the store holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared store handle provided to components through Leptos context.
#[derive(Clone)]
pub struct StoreContext(pub Arc<dyn SessionStore>);

impl StoreContext {
    /// Browser-backed store for the running app.
    pub fn browser() -> Self {
        Self(Arc::new(BrowserStore))
    }
}

/// `localStorage`-backed store.
///
/// Every operation re-resolves the storage handle, so the type stays
/// zero-sized and thread-agnostic. Outside the hydrate build, or when the
/// browser denies storage access, reads return `None` and writes no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.clear();
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn len(&self) -> usize {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|s| s.length().ok()).unwrap_or(0) as usize
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }
}

/// In-memory store for unit tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }
}
