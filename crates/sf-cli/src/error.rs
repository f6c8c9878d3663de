use std::panic::Location;

use error_location::ErrorLocation;
use sf_client::ClientError;
use sf_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Input error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source}")]
    Output {
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input<S: Into<String>>(message: S) -> Self {
        CliError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short message for stderr; backend errors show the extracted message.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Client(e) => match e.status() {
                Some(status) => format!("{} (HTTP {status})", e.user_message()),
                None => e.user_message(),
            },
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        CliError::Output { source }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
