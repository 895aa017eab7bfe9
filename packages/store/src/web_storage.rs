use crate::session::{SessionStore, StoredSession};

const SESSION_KEY: &str = "financio.session";

/// `localStorage`-backed SessionStore for the browser. The whole session is
/// one JSON value under [`SESSION_KEY`], so a partial write can never leave
/// a token without its identity fields.
#[derive(Clone, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for WebStorage {
    fn load(&self) -> Option<StoredSession> {
        let storage = Self::storage()?;
        let raw = storage.get_item(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding unreadable stored session: {e}");
                let _ = storage.remove_item(SESSION_KEY);
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(SESSION_KEY, &raw).is_err() {
                    tracing::error!("failed to persist session to localStorage");
                }
            }
            Err(e) => tracing::error!("failed to serialize session: {e}"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
