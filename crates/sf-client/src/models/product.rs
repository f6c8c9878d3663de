use crate::models::{attribute, image_url};

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_PRODUCT_TITLE: &str = "Untitled";

/// Product detail, normalized from either content entry shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl Product {
    /// Build from the `data` member of a product response.
    /// `None` when the entry has no numeric id.
    pub fn from_entry(data: &Value, base_url: &str) -> Option<Self> {
        let id = data.get("id").and_then(Value::as_u64)?;

        let title = attribute(data, "titre")
            .or_else(|| attribute(data, "title"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PRODUCT_TITLE)
            .to_string();

        let price = attribute(data, "price").and_then(|p| match p {
            Value::String(s) => s.parse().ok(),
            other => other.as_f64(),
        });

        Some(Self {
            id,
            title,
            description: attribute(data, "description")
                .and_then(Value::as_str)
                .map(String::from),
            price,
            image_url: image_url(data, base_url),
        })
    }
}
