//! In-memory session store. Each bag sits behind its own async mutex so that a
//! request holds exclusive access to its session for as long as it runs.
//!
//! Entries idle for longer than the store's idle timeout are treated as gone
//! and are swept whenever a new session is created.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::sessions::bag::SessionBag;

/// A resolved session, attached to each request by the session middleware.
#[derive(Clone)]
pub struct Session {
    pub id: Uuid,
    pub bag: Arc<Mutex<SessionBag>>,
}

impl Session {
    /// A blank session that is not held by any store. Writes to it are lost
    /// when the request ends.
    pub fn detached() -> Self {
        Self {
            id: Uuid::new_v4(),
            bag: Arc::new(Mutex::new(SessionBag::default())),
        }
    }
}

struct Entry {
    bag: Arc<Mutex<SessionBag>>,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Returns the live session for `requested` and marks it as seen.
    /// Never creates anything.
    pub fn lookup(&self, requested: Option<Uuid>) -> Option<Session> {
        let id = requested?;
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        let entry = sessions.get_mut(&id)?;
        if now.duration_since(entry.last_seen) >= self.idle_timeout {
            return None;
        }
        entry.last_seen = now;
        Some(Session {
            id,
            bag: Arc::clone(&entry.bag),
        })
    }

    /// Returns the session for `requested` when it is live; otherwise creates a
    /// fresh one. Client-chosen ids are never adopted.
    pub fn resolve(&self, requested: Option<Uuid>) -> Session {
        if let Some(session) = self.lookup(requested) {
            return session;
        }

        let now = Instant::now();
        let id = Uuid::new_v4();
        let bag = Arc::new(Mutex::new(SessionBag::default()));

        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        let swept = before - sessions.len();
        if swept > 0 {
            debug!("Swept {swept} idle sessions");
        }
        sessions.insert(
            id,
            Entry {
                bag: Arc::clone(&bag),
                last_seen: now,
            },
        );
        drop(sessions);

        info!("Created session {id}");
        Session { id, bag }
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_resolve_without_id_creates_session() {
        let store = SessionStore::new(IDLE);
        let session = store.resolve(None);
        assert_eq!(store.len(), 1);
        assert_eq!(session.bag.lock().await.total_xp(), 0);
    }

    #[tokio::test]
    async fn test_resolve_known_id_returns_same_bag() {
        let store = SessionStore::new(IDLE);
        let first = store.resolve(None);
        first.bag.lock().await.credit_xp(10);

        let again = store.resolve(Some(first.id));
        assert_eq!(again.id, first.id);
        assert_eq!(again.bag.lock().await.total_xp(), 10);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id_is_not_adopted() {
        let store = SessionStore::new(IDLE);
        let forged = Uuid::new_v4();
        let session = store.resolve(Some(forged));
        assert_ne!(session.id, forged);
    }

    #[test]
    fn test_lookup_never_creates() {
        let store = SessionStore::new(IDLE);
        assert!(store.lookup(None).is_none());
        assert!(store.lookup(Some(Uuid::new_v4())).is_none());
        assert_eq!(store.len(), 0);

        let session = store.resolve(None);
        assert_eq!(store.lookup(Some(session.id)).map(|s| s.id), Some(session.id));
    }

    #[test]
    fn test_detached_session_is_not_stored() {
        let store = SessionStore::new(IDLE);
        let session = Session::detached();
        assert!(store.lookup(Some(session.id)).is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_remove_discards_session() {
        let store = SessionStore::new(IDLE);
        let session = store.resolve(None);
        assert!(store.remove(session.id));
        assert!(!store.remove(session.id));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires_and_is_swept() {
        let store = SessionStore::new(IDLE);
        let stale = store.resolve(None);

        tokio::time::advance(IDLE + Duration::from_secs(1)).await;
        assert!(store.lookup(Some(stale.id)).is_none());

        let fresh = store.resolve(Some(stale.id));
        assert_ne!(fresh.id, stale.id);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let store = SessionStore::new(IDLE);
        let session = store.resolve(None);

        tokio::time::advance(Duration::from_secs(40)).await;
        assert!(store.lookup(Some(session.id)).is_some());
        tokio::time::advance(Duration::from_secs(40)).await;

        store.resolve(None);
        assert_eq!(store.len(), 2);
        assert_eq!(store.resolve(Some(session.id)).id, session.id);
    }
}
