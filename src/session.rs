use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use log::{debug, info, warn};

use crate::models::auth::Role;
use crate::router::Route;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Persistent string key-value storage. Batched writes land together or not
/// at all.
pub trait KeyValueStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()>;
    fn remove_many(&mut self, keys: &[&str]) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.values.insert((*key).to_owned(), (*value).to_owned());
        }
        Ok(())
    }

    fn remove_many(&mut self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.values.remove(*key);
        }
        Ok(())
    }
}

/// A JSON object on disk, rewritten in full on every change so values
/// survive restarts.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };
        debug!("Opened session storage at {}", path.display());
        Ok(Self { path, values })
    }

    /// Writes `next` to disk and adopts it only once the write succeeded, so
    /// memory never runs ahead of the file.
    fn commit(&mut self, next: HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&next)?)?;
        self.values = next;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        let mut next = self.values.clone();
        for (key, value) in entries {
            next.insert((*key).to_owned(), (*value).to_owned());
        }
        self.commit(next)
    }

    fn remove_many(&mut self, keys: &[&str]) -> Result<()> {
        if !keys.iter().any(|key| self.values.contains_key(*key)) {
            return Ok(());
        }
        let mut next = self.values.clone();
        for key in keys {
            next.remove(*key);
        }
        self.commit(next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn landing(&self) -> Route {
        Route::landing_for(self.role)
    }
}

/// Cloneable handle to the stored session. Every network-calling page gets
/// one through its `ApiContext`.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<Mutex<Box<dyn KeyValueStorage>>>,
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        let storage: Box<dyn KeyValueStorage> = Box::new(storage);
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn KeyValueStorage>> {
        self.storage.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn load(&self) -> Option<Session> {
        let storage = self.lock();
        let token = storage.get(TOKEN_KEY)?;
        let role = storage
            .get(ROLE_KEY)
            .map(|role| Role::from_stored(&role))
            .unwrap_or_default();
        Some(Session { token, role })
    }

    pub fn token(&self) -> Option<String> {
        self.lock().get(TOKEN_KEY)
    }

    pub fn role(&self) -> Option<String> {
        self.lock().get(ROLE_KEY)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        self.lock().set_many(&[
            (TOKEN_KEY, session.token.as_str()),
            (ROLE_KEY, session.role.as_str()),
        ])?;
        info!("Session stored for role {}", session.role.as_str());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.lock().remove_many(&[TOKEN_KEY, ROLE_KEY])?;
        info!("Session cleared");
        Ok(())
    }
}

/// Drops the stored credentials and sends the user back to the login page.
/// A storage failure is logged; the user is logged out of this window
/// regardless.
pub fn logout(store: &SessionStore) -> Route {
    if let Err(e) = store.clear() {
        warn!("Failed to clear stored session: {}", e);
    }
    Route::Login
}
