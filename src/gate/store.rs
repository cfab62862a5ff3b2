use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::foundation::error::{CloserError, CloserResult};

/// Key under which the gate records that it was unlocked.
pub const UNLOCK_KEY: &str = "closer_unlocked";
/// Stored value meaning "unlocked".
pub const UNLOCKED_VALUE: &str = "1";

/// Small persistent string key-value store.
pub trait FlagStore {
    fn get(&self, key: &str) -> CloserResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> CloserResult<()>;
    fn remove(&mut self, key: &str) -> CloserResult<()>;
}

impl<S: FlagStore + ?Sized> FlagStore for Box<S> {
    fn get(&self, key: &str) -> CloserResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> CloserResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> CloserResult<()> {
        (**self).remove(key)
    }
}

/// Process-local store; forgets everything on drop.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> CloserResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CloserResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CloserResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file (`{"key": "value", ...}`). A missing
/// file reads as empty; writes create parent directories.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> CloserResult<BTreeMap<String, String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(CloserError::store(format!(
                    "read '{}': {e}",
                    self.path.display()
                )));
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            CloserError::store(format!("parse '{}': {e}", self.path.display()))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> CloserResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CloserError::store(format!("create dir '{}': {e}", parent.display()))
                })?;
            }
        }
        let json = serde_json::to_vec_pretty(entries)?;
        std::fs::write(&self.path, json)
            .map_err(|e| CloserError::store(format!("write '{}': {e}", self.path.display())))
    }
}

impl FlagStore for FileStore {
    fn get(&self, key: &str) -> CloserResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> CloserResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> CloserResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/store.rs"]
mod tests;
