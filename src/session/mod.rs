use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rand::Rng;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::store::SessionStore;


/// Handle to one session's store.
///
/// Handlers lock it for the duration of a single store operation and never
/// hold it across an await point.
pub type StoreHandle = Arc<Mutex<SessionStore>>;

/// Session metadata; the store itself lives behind the handle.
#[derive(Debug, Clone)]
pub struct Session {
    /// System-generated ID (sess_{random_8chars})
    pub id: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

/// Registry of live sessions.
///
/// Each session owns an independent store; nothing is shared between
/// sessions. Ending a session discards its store.
pub struct SessionRegistry {
    /// Primary storage: session_id -> (metadata, store handle)
    sessions: Arc<DashMap<String, (Session, StoreHandle)>>,
    /// Seed directory for new stores; None means built-in defaults only
    seed_dir: Option<PathBuf>,
}

impl SessionRegistry {
    /// Registry whose sessions start from the built-in defaults.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            seed_dir: None,
        }
    }

    /// Registry whose sessions seed their stores from JSON files under `dir`.
    /// Missing or malformed files still fall back to the defaults.
    pub fn with_seed_dir(dir: PathBuf) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            seed_dir: Some(dir),
        }
    }

    /// Create a new session with a freshly seeded store.
    pub fn create(&self) -> Session {
        let id = generate_session_id();
        let store = match &self.seed_dir {
            Some(dir) => SessionStore::initialize(dir),
            None => SessionStore::with_defaults(),
        };

        let session = Session {
            id: id.clone(),
            created_at: Utc::now(),
        };
        self.sessions
            .insert(id, (session.clone(), Arc::new(Mutex::new(store))));

        session
    }

    /// Look up a session's store handle.
    pub fn get(&self, id: &str) -> Option<StoreHandle> {
        self.sessions.get(id).map(|entry| entry.value().1.clone())
    }

    /// Look up a session's metadata.
    pub fn info(&self, id: &str) -> Option<Session> {
        self.sessions.get(id).map(|entry| entry.value().0.clone())
    }

    /// End a session, discarding its store. Returns false if the id is
    /// unknown.
    pub fn end(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Number of live sessions.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate session ID: sess_{random_8chars}
fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    let random: String = (0..8)
        .map(|_| {
            let idx = rng.gen_range(0..36);
            if idx < 10 {
                (b'0' + idx) as char
            } else {
                (b'a' + idx - 10) as char
            }
        })
        .collect();
    format!("sess_{}", random)
}
