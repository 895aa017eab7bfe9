use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, StoredSession};

/// In-memory SessionStore for testing and non-web fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<StoredSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<StoredSession> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoredSession {
        StoredSession {
            token: "tok-123".to_string(),
            user_id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn save_load_clear_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&sample());
        assert_eq!(store.load(), Some(sample()));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = MemoryStore::new();
        store.save(&sample());

        let mut other = sample();
        other.user_id = "u2".to_string();
        store.save(&other);

        assert_eq!(store.load().unwrap().user_id, "u2");
    }
}
