use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PLACEHOLDER_ID: u64 = 1;
pub const PLACEHOLDER_USERNAME: &str = "testuser";
pub const PLACEHOLDER_EMAIL: &str = "test@example.com";
pub const PLACEHOLDER_PROVIDER: &str = "local";

/// Locally cached view of the authenticated user.
///
/// Attributes the backend returns beyond the known ones (e.g. `documentId`)
/// are kept in `extra` so a stored profile reads back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_token: Option<String>,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
}

/// Partial profile merged over the placeholder record by `set_token`.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub id: Option<u64>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub provider: Option<String>,
    pub confirmed: Option<bool>,
    pub blocked: Option<bool>,
    pub role: Option<Role>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ProfileOverrides {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl UserProfile {
    /// Fixed stand-in profile used when a token is injected by hand.
    pub fn placeholder(timestamp: &str) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            username: PLACEHOLDER_USERNAME.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
            provider: PLACEHOLDER_PROVIDER.to_string(),
            reset_password_token: None,
            confirmation_token: None,
            confirmed: true,
            blocked: false,
            role: None,
            created_at: timestamp.to_string(),
            updated_at: timestamp.to_string(),
            extra: Map::new(),
        }
    }

    pub fn with_overrides(self, overrides: ProfileOverrides) -> Self {
        Self {
            id: overrides.id.unwrap_or(self.id),
            username: overrides.username.unwrap_or(self.username),
            email: overrides.email.unwrap_or(self.email),
            provider: overrides.provider.unwrap_or(self.provider),
            confirmed: overrides.confirmed.unwrap_or(self.confirmed),
            blocked: overrides.blocked.unwrap_or(self.blocked),
            role: overrides.role.or(self.role),
            created_at: overrides.created_at.unwrap_or(self.created_at),
            updated_at: overrides.updated_at.unwrap_or(self.updated_at),
            ..self
        }
    }
}
