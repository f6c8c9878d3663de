pub(crate) mod auth_response;
pub(crate) mod collection_item;
pub(crate) mod contact_message;
pub(crate) mod product;
pub(crate) mod user_profile;

pub use auth_response::AuthResponse;
pub use collection_item::CollectionItem;
pub use contact_message::ContactMessage;
pub use product::Product;
pub use user_profile::{ProfileOverrides, Role, UserProfile};

use serde_json::Value;

/// Look a field up on a content entry, accepting both the nested
/// `{attributes: {...}}` shape and the flat shape. Nulls count as missing.
pub(crate) fn attribute<'a>(data: &'a Value, name: &str) -> Option<&'a Value> {
    data.get("attributes")
        .and_then(|attrs| attrs.get(name))
        .filter(|v| !v.is_null())
        .or_else(|| data.get(name).filter(|v| !v.is_null()))
}

/// Resolve a media URL from either entry shape.
///
/// Nested: `attributes.image.data.attributes.url`.
/// Flat: `image[0].url` or `image.url`.
pub(crate) fn image_url(data: &Value, base_url: &str) -> Option<String> {
    let nested = data
        .pointer("/attributes/image/data/attributes/url")
        .and_then(Value::as_str);

    let flat = || {
        let image = match data.get("image")? {
            Value::Array(images) => images.first()?,
            image => image,
        };
        image.get("url").and_then(Value::as_str)
    };

    nested.or_else(flat).map(|url| absolute_url(base_url, url))
}

fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}/{}", base_url, url.trim_start_matches('/'))
    }
}
