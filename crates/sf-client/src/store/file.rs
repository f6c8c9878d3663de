use crate::store::{SessionKey, SessionStore, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Session store backed by a single JSON file.
///
/// Both entries live in one object (`{"token": "...", "user": "..."}`) so a
/// session pair is never split across files. Writes go through a temp file,
/// fsync and rename; an empty store removes the file entirely.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as empty; unparsable contents are `Corrupted`.
    fn read_entries(&self) -> StoreResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::file_read(self.path.clone(), e))?;

        serde_json::from_str::<Entries>(&contents)
            .map_err(|e| StoreError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Like `read_entries`, but a corrupted file is discarded so the
    /// pending write can replace it.
    fn read_entries_for_update(&self) -> StoreResult<Entries> {
        match self.read_entries() {
            Err(StoreError::Corrupted { message, .. }) => {
                warn!(
                    "Discarding corrupted session file at {:?}: {message}",
                    self.path
                );
                Ok(Entries::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &Entries) -> StoreResult<()> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StoreError::file_write(self.path.clone(), e)),
            };
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::dir_creation(parent.to_path_buf(), e))?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        debug!("Saved session file {:?}", self.path);
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key.as_str()))
    }

    fn set(&self, key: SessionKey, value: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;
        let mut entries = self.read_entries_for_update()?;
        entries.insert(key.as_str().to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: SessionKey) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;
        let mut entries = self.read_entries_for_update()?;
        if entries.remove(key.as_str()).is_none() && !entries.is_empty() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
