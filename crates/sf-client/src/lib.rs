//! sf-client
//!
//! Session and catalog client for the storefront's headless content backend.
//! Session state (a bearer credential plus a cached user profile) lives in an
//! injected [`SessionStore`], so callers pick file-backed or in-memory storage.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod models;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use client::{ProfileRead, SessionClient};
pub use error::{ClientError, Result as ClientResult, extract_message};
pub use models::{
    AuthResponse, CollectionItem, ContactMessage, Product, ProfileOverrides, Role, UserProfile,
};
pub use store::{
    FileSessionStore, MemorySessionStore, SessionKey, SessionStore, StoreError, StoreResult,
};
