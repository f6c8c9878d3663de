use crate::{ClientError, ClientResult, SessionStore};

use std::sync::Arc;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde_json::Value;
use sf_config::ApiConfig;

pub(crate) const AUTH_PATH: &str = "/api/auth/";

/// HTTP client for the content backend's identity and catalog endpoints.
///
/// Holds two transport handles: `http` is the primary path for every call,
/// `secondary_http` is only used by `register` when the primary path fails
/// before any HTTP response arrives.
pub struct SessionClient {
    pub(crate) base_url: String,
    pub(crate) fallback_credential: String,
    pub(crate) http: ReqwestClient,
    pub(crate) secondary_http: ReqwestClient,
    pub(crate) store: Arc<dyn SessionStore>,
}

impl SessionClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api` - Backend origin and the pre-shared fallback credential
    /// * `store` - Where the session pair is persisted
    pub fn new(api: &ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: api.normalized_base_url().to_string(),
            fallback_credential: api.fallback_credential.clone(),
            http: ReqwestClient::new(),
            secondary_http: ReqwestClient::new(),
            store,
        }
    }

    /// Replace both transport handles (proxies, custom TLS roots, tests).
    pub fn with_http_clients(mut self, primary: ReqwestClient, secondary: ReqwestClient) -> Self {
        self.http = primary;
        self.secondary_http = secondary;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root of the authentication endpoints, e.g. `https://cms.example.com/api/auth/`
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_url, AUTH_PATH)
    }

    /// Build a bearer-authenticated request on the given transport
    pub(crate) fn request(
        &self,
        http: &ReqwestClient,
        method: Method,
        path: &str,
        credential: &str,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        http.request(method, &url).bearer_auth(credential)
    }

    /// Execute request and map the response.
    ///
    /// Send and body-read failures become `Transport`; non-2xx becomes `Api`
    /// with the body kept as-is; an empty 2xx body reads as `Null` and a
    /// non-JSON 2xx body is returned as a JSON string.
    pub(crate) async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            debug!("Backend responded {status}: {body}");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
    }
}
