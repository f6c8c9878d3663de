use crate::models::{attribute, image_url};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionItem {
    pub id: u64,
    pub title: String,
    pub image_url: Option<String>,
}

impl CollectionItem {
    pub fn from_entry(data: &Value, base_url: &str) -> Option<Self> {
        let id = data.get("id").and_then(Value::as_u64)?;
        let title = attribute(data, "title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Some(Self {
            id,
            title,
            image_url: image_url(data, base_url),
        })
    }
}
