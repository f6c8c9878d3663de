use crate::{ClientError, ClientResult, CollectionItem, ContactMessage, Product, SessionClient};

use log::warn;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

const PRODUCTS_PATH: &str = "/api/products";
const ITEMS_PATH: &str = "/api/items?populate=image";
const CONTACTS_PATH: &str = "/api/contacts";

impl SessionClient {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Get a product by ID
    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ClientError::invalid_input("product id is required"));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(ClientError::invalid_input(format!(
                "product id '{id}' contains invalid characters"
            )));
        }

        let req = self.request(
            &self.http,
            Method::GET,
            &format!("{}/{}?populate=*", PRODUCTS_PATH, id),
            &self.fallback_credential,
        );
        let body = self.execute(req).await?;

        body.get("data")
            .and_then(|data| Product::from_entry(data, &self.base_url))
            .ok_or_else(|| ClientError::unexpected_response("product response has no data.id"))
    }

    /// List collection items
    pub async fn collection(&self) -> ClientResult<Vec<CollectionItem>> {
        let req = self.request(
            &self.http,
            Method::GET,
            ITEMS_PATH,
            &self.fallback_credential,
        );
        let body = self.execute(req).await?;

        let entries = body
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(entries
            .iter()
            .filter_map(|entry| {
                let item = CollectionItem::from_entry(entry, &self.base_url);
                if item.is_none() {
                    warn!("Skipping collection entry without an id: {entry}");
                }
                item
            })
            .collect())
    }

    // =========================================================================
    // Contact Operations
    // =========================================================================

    /// Submit the contact form
    pub async fn send_contact(&self, message: &ContactMessage) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct ContactRequest<'a> {
            data: &'a ContactMessage,
        }

        let body = ContactRequest { data: message };
        let req = self
            .request(
                &self.http,
                Method::POST,
                CONTACTS_PATH,
                &self.fallback_credential,
            )
            .json(&body);
        self.execute(req).await
    }
}
