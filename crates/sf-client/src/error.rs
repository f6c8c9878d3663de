use crate::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during calls to the content backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// No HTTP status available: connect, DNS, TLS or body read failure.
    #[error("HTTP transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response. `body` is the backend's JSON body, unmodified
    /// (`Null` when the body was not JSON).
    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        body: Value,
        location: ErrorLocation,
    },

    /// 2xx response whose body did not have the expected shape.
    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    /// 2xx response that parsed as JSON but lacks a required member.
    #[error("Unexpected response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error from a status and the raw response body
    #[track_caller]
    pub fn api_error(status: u16, body: Value) -> Self {
        let message = extract_message(&body).unwrap_or_else(|| format!("HTTP {status}"));
        ClientError::Api {
            status,
            message,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_response<S: Into<String>>(message: S) -> Self {
        ClientError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }

    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend error body of an `Api` error.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ClientError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Message suitable for showing next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport { message, .. }
            | ClientError::Api { message, .. }
            | ClientError::Json { message, .. }
            | ClientError::InvalidInput { message, .. }
            | ClientError::UnexpectedResponse { message, .. } => message.clone(),
            ClientError::Store { source, .. } => source.to_string(),
        }
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// Accepted shapes, in order:
/// - `message: "text"`
/// - `message: ["text", ...]`, `message: [{message}]`, `message: [{messages: [{message}]}]`
/// - `error: {message}`
/// - `error: "text"`
pub fn extract_message(body: &Value) -> Option<String> {
    let from_message = match body.get("message") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => items.first().and_then(message_of_entry),
        _ => None,
    };

    from_message.or_else(|| match body.get("error") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(error) => error
            .get("message")
            .and_then(Value::as_str)
            .map(String::from),
        None => None,
    })
}

fn message_of_entry(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => entry
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| {
                entry
                    .get("messages")
                    .and_then(Value::as_array)
                    .and_then(|messages| messages.first())
                    .and_then(message_of_entry)
            }),
        _ => None,
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<StoreError> for ClientError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        ClientError::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
