//! File-backed implementation of the `SecureStore` port.
//!
//! Session entries live in `session.json` inside the given directory.
//! Platform keychains are a drop-in replacement behind the same port;
//! the file form assumes the directory itself is access-protected.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use sesame_application::SecureStore;

/// Name of the session file inside the store directory.
const SESSION_FILE: &str = "session.json";

/// Errors opening the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// File-backed string store.
///
/// All entries are held in memory; every `set` rewrites the file before
/// returning, so a value read back immediately after a write is always
/// the written one, and the refresh token survives a process restart.
#[derive(Debug)]
pub struct FileSecureStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileSecureStore {
    /// Open (or create) the store under the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an
    /// existing session file cannot be read or parsed.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(SESSION_FILE);

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| StoreError::Serialization(e.to_string()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        let serialized = match serde_json::to_vec_pretty(entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize session store");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, serialized) {
            // The port treats storage as reliable; keep the in-memory
            // view coherent and leave a trace of the broken backend.
            tracing::error!(path = %self.path.display(), error = %e, "failed to write session store");
        }
    }
}

impl SecureStore for FileSecureStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Option<&str>) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match value {
            Some(v) => entries.insert(key.to_string(), v.to_string()),
            None => entries.remove(key),
        };
        self.persist(&entries);
    }
}
