//! Preference Persistence
//!
//! A thin port over raw string blob storage, with JSON (de)serialization
//! and the empty-catalog write guard layered on top.

use crate::models::Preferences;
use crate::state::AppState;

/// localStorage key for the preference blob
pub const STORAGE_KEY: &str = "wanderlist";

/// Port for loading/saving the raw preference blob
pub trait BlobPort {
    /// Read the stored blob, `None` if missing or unreadable
    fn load_raw(&self) -> Option<String>;
    /// Persist the blob, best-effort
    fn save_raw(&self, raw: &str);
}

/// Browser localStorage under the fixed key
pub struct LocalStoragePort;

impl BlobPort for LocalStoragePort {
    fn load_raw(&self) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save_raw(&self, raw: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, raw);
    }
}

/// In-memory port for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryPort {
    blob: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl BlobPort for MemoryPort {
    fn load_raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    fn save_raw(&self, raw: &str) {
        *self.blob.borrow_mut() = Some(raw.to_owned());
    }
}

/// Preference store over a blob port
pub struct PreferenceStore<P: BlobPort> {
    port: P,
}

impl<P: BlobPort> PreferenceStore<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    #[cfg(test)]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Load saved flags. A missing or malformed blob reads as `None`.
    pub fn load(&self) -> Option<Preferences> {
        let raw = self.port.load_raw()?;
        match serde_json::from_str(&raw) {
            Ok(prefs) => Some(prefs),
            Err(err) => {
                log::warn!("discarding malformed preference blob: {err}");
                None
            }
        }
    }

    /// Persist the current flags. Skipped while the catalog is empty so
    /// the unloaded bootstrap state cannot clobber previously saved flags.
    pub fn save(&self, state: &AppState) {
        if state.places.is_empty() {
            return;
        }
        match serde_json::to_string(&state.prefs) {
            Ok(raw) => self.port.save_raw(&raw),
            Err(err) => log::error!("failed to encode preferences: {err}"),
        }
    }
}
