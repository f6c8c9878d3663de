use crate::UserProfile;

/// Outcome of reading the stored profile - distinguishes "never stored"
/// from "stored but unreadable".
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileRead {
    Missing,
    /// Entry exists but is not a valid profile; carries the parse error
    Corrupted(String),
    Loaded(UserProfile),
}
