use std::fs;
use std::path::PathBuf;

use crate::session::{SessionStore, StoredSession};

/// File-backed SessionStore for native targets. The session is stored as a
/// single JSON document; a missing or unreadable file is an absent session.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<StoredSession> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding unreadable session file: {e}");
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("failed to create session dir: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(session) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    tracing::error!("failed to write session file: {e}");
                }
            }
            Err(e) => tracing::error!("failed to serialize session: {e}"),
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::error!("failed to remove session file: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoredSession {
        StoredSession {
            token: "tok-abc".to_string(),
            user_id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("session.json"));

        assert!(store.load().is_none());

        store.save(&sample());
        assert_eq!(store.load(), Some(sample()));

        store.clear();
        assert!(store.load().is_none());
        // clearing twice is fine
        store.clear();
    }

    #[test]
    fn corrupt_file_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(path);
        assert!(store.load().is_none());
    }
}
