//! Persisted session state — the bearer token and the minimal identity
//! fields the app needs before the backend has been asked anything.
//!
//! The session lives in exactly one place per platform:
//! - **Web** (wasm32 + `web` feature): browser `localStorage` via [`crate::WebStorage`]
//! - **Native**: a JSON file under the platform data dir via [`crate::FileStore`]
//! - **Tests / fallback**: [`crate::MemoryStore`]
//!
//! Signing out and the global 401 handler both go through [`SessionStore::clear`].

use serde::{Deserialize, Serialize};

/// Everything the client persists between page loads. The backend remains
/// the source of truth for the full user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token attached to every gateway request.
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
}

/// Storage backend for the persisted session.
pub trait SessionStore {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// Create the session store appropriate for the current platform.
pub fn platform_store() -> std::sync::Arc<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        std::sync::Arc::new(crate::WebStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        std::sync::Arc::new(crate::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("financio");
        std::sync::Arc::new(crate::FileStore::new(base.join("session.json")))
    }
}
