pub(crate) mod auth;
pub(crate) mod catalog;
pub(crate) mod client;
pub(crate) mod profile_read;
pub(crate) mod session;

pub use client::SessionClient;
pub use profile_read::ProfileRead;
