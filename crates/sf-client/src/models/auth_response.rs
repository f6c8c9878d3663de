use crate::UserProfile;

use serde::{Deserialize, Serialize};

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
    pub user: UserProfile,
}
