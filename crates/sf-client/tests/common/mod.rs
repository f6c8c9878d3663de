//! Shared fixtures for the wiremock-backed client tests

#![allow(dead_code)]

use sf_client::{MemorySessionStore, SessionClient};
use sf_config::ApiConfig;

use std::net::TcpListener;
use std::sync::Arc;

use serde_json::{Value, json};

pub const FALLBACK: &str = "fallback-secret";
pub const FALLBACK_BEARER: &str = "Bearer fallback-secret";

pub fn client(base_url: &str) -> (SessionClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let api = ApiConfig {
        base_url: base_url.to_string(),
        fallback_credential: FALLBACK.to_string(),
    };
    (SessionClient::new(&api, store.clone()), store)
}

/// Address nothing is listening on
pub fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Transport whose every request fails before reaching the server
pub fn unreachable_http() -> reqwest::Client {
    reqwest::Client::builder()
        .proxy(reqwest::Proxy::all(closed_address()).unwrap())
        .build()
        .unwrap()
}

pub fn user_json(id: u64, username: &str, email: &str) -> Value {
    json!({
        "id": id,
        "documentId": format!("doc{id}"),
        "username": username,
        "email": email,
        "provider": "local",
        "confirmed": true,
        "blocked": false,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn auth_json(jwt: &str, id: u64, username: &str, email: &str) -> Value {
    json!({ "jwt": jwt, "user": user_json(id, username, email) })
}
