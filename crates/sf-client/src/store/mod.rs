pub(crate) mod error;
pub(crate) mod file;
pub(crate) mod memory;
pub(crate) mod session_key;

pub use error::{Result as StoreResult, StoreError};
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use session_key::SessionKey;

/// Persistent key-value storage for the session pair.
///
/// Holds exactly two string entries, `token` and `user`. Implementations
/// are shared process-wide; concurrent writers follow last-writer-wins.
pub trait SessionStore: Send + Sync {
    /// Read an entry. `Ok(None)` when it was never set or has been removed.
    fn get(&self, key: SessionKey) -> StoreResult<Option<String>>;

    /// Overwrite an entry.
    fn set(&self, key: SessionKey, value: &str) -> StoreResult<()>;

    /// Delete an entry. Removing a missing entry is not an error.
    fn remove(&self, key: SessionKey) -> StoreResult<()>;
}
