use crate::store::{SessionKey, SessionStore, StoreError, StoreResult};

use std::collections::HashMap;
use std::sync::Mutex;

/// In-process session store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        Ok(entries.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        entries.remove(&key);
        Ok(())
    }
}
