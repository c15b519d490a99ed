// Session Store Trait and Backends
//
// Two logical keys, mirroring the browser original: "token" holds the plain
// bearer token string, "user" holds the serialized user record. Both are
// written at the login boundary and read everywhere else.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

use crate::user::SessionUser;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Errors raised when opening a session store backend
#[derive(Debug, Error)]
pub enum SessionError {
    /// No platform data directory is available for the file-backed store
    #[error("no platform data directory available")]
    NoDataDir,

    /// Filesystem error while preparing the store location
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accessor interface over the persisted session state.
///
/// All methods are synchronous and infallible, matching the storage the
/// original code relied on: a failed read is indistinguishable from an
/// absent session.
pub trait SessionStore: Send + Sync {
    /// Current bearer token, if a login has stored one
    fn token(&self) -> Option<String>;

    /// Persist the bearer token
    fn set_token(&self, token: &str);

    /// Raw serialized user record, undecoded
    fn user_record(&self) -> Option<String>;

    /// Persist a raw serialized user record
    fn set_user_record(&self, raw: &str);

    /// Drop the cached user record, leaving the token in place
    fn remove_user(&self);

    /// Drop both keys (logout boundary)
    fn clear(&self);

    /// Serialize and persist a user record
    fn set_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(raw) => self.set_user_record(&raw),
            Err(err) => warn!(error = %err, "failed to serialize session user"),
        }
    }
}

/// In-memory store, used by tests and short-lived embeddings
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.entries.lock().unwrap().get(TOKEN_KEY).cloned()
    }

    fn set_token(&self, token: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(TOKEN_KEY.to_string(), token.to_string());
    }

    fn user_record(&self) -> Option<String> {
        self.entries.lock().unwrap().get(USER_KEY).cloned()
    }

    fn set_user_record(&self, raw: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(USER_KEY.to_string(), raw.to_string());
    }

    fn remove_user(&self) {
        self.entries.lock().unwrap().remove(USER_KEY);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// File-backed store holding both keys in one JSON document.
///
/// The default location is `{data_dir}/docextract/session.json`. A missing
/// or unparseable file behaves as an empty session; write failures are
/// logged and otherwise ignored, the same observable behavior browser
/// storage gave the original.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at the platform-default location
    pub fn open_default() -> Result<Self, SessionError> {
        let dir = dirs::data_dir()
            .ok_or(SessionError::NoDataDir)?
            .join("docextract");
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("session.json"),
        })
    }

    /// Open the store at an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> HashMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn save(&self, entries: &HashMap<String, String>) {
        let content = match serde_json::to_string_pretty(entries) {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "failed to serialize session file");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, content) {
            warn!(path = %self.path.display(), error = %err, "failed to write session file");
        }
    }

    fn update(&self, apply: impl FnOnce(&mut HashMap<String, String>)) {
        let mut entries = self.load();
        apply(&mut entries);
        self.save(&entries);
    }
}

impl SessionStore for FileStore {
    fn token(&self) -> Option<String> {
        self.load().get(TOKEN_KEY).cloned()
    }

    fn set_token(&self, token: &str) {
        self.update(|e| {
            e.insert(TOKEN_KEY.to_string(), token.to_string());
        });
    }

    fn user_record(&self) -> Option<String> {
        self.load().get(USER_KEY).cloned()
    }

    fn set_user_record(&self, raw: &str) {
        self.update(|e| {
            e.insert(USER_KEY.to_string(), raw.to_string());
        });
    }

    fn remove_user(&self) {
        self.update(|e| {
            e.remove(USER_KEY);
        });
    }

    fn clear(&self) {
        self.update(|e| e.clear());
    }
}
