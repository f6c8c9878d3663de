use serde::Serialize;

/// Contact form submission. Field names follow the backend's content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    #[serde(rename = "Prenom")]
    pub first_name: String,
    #[serde(rename = "Nom")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Message")]
    pub message: String,
}
