//! Typed error handling for listing fetches and configuration
//!
//! # Error Categories
//!
//! - [`FetchError`]: a fetch cycle or insight lookup failed
//! - [`ConfigError`]: client configuration could not be loaded or is invalid
//!
//! The list controller treats every [`FetchError`] the same way: the error is
//! logged, the loading flag clears, and the previously displayed page stays.
//! Callers that want to react to specific failures can still match on it.
//!
//! ```rust,ignore
//! match client.people().fetch_list(&params).await {
//!     Ok(page) => println!("{} people", page.count),
//!     Err(FetchError::Http { status: 404, .. }) => println!("no such page"),
//!     Err(e) => eprintln!("fetch failed: {}", e),
//! }
//! ```

use thiserror::Error;

/// Failure of a single request against the remote listing API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or the response never completed
    #[error("Network failure: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status
    #[error("Fetch error: {status} - {body}")]
    Http { status: u16, body: String },

    /// The body did not have the expected shape
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl FetchError {
    /// HTTP status code, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "NETWORK_FAILURE",
            FetchError::Http { .. } => "HTTP_ERROR",
            FetchError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MalformedResponse {
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            FetchError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse {
            message: err.to_string(),
        }
    }
}

/// Errors raised while loading or validating [`ClientConfig`](crate::config::ClientConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field is out of range or malformed
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ConfigError::Invalid {
            message: errors.to_string(),
        }
    }
}
