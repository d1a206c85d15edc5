//! Error types for the podio client.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, authentication, API, and transport failures.

use thiserror::Error;

/// The unified error type for podio operations.
///
/// Every variant that originates from an HTTP response carries the status
/// code and the raw response body, available through [`Error::status_code`]
/// and [`Error::response_raw`] regardless of which stage failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or incomplete client configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The token endpoint did not issue an access token.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// An item endpoint answered with a status other than 200.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered 200 but the body could not be decoded.
    #[error("invalid response (HTTP {status_code}): {reason}")]
    InvalidResponse {
        status_code: u16,
        response_raw: String,
        reason: String,
    },

    /// An operation was invoked without a configured client.
    #[error(
        "client is not configured: construct a PodioClient with app_id, app_token, \
         client_id and client_secret before calling item operations"
    )]
    NotConfigured,
}

impl Error {
    /// Returns the HTTP status code of the failing response, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Auth(e) => Some(e.status_code),
            Error::Api(e) => Some(e.status_code),
            Error::InvalidResponse { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns the raw body of the failing response, if there was one.
    pub fn response_raw(&self) -> Option<&str> {
        match self {
            Error::Auth(e) => Some(&e.response_raw),
            Error::Api(e) => Some(&e.response_raw),
            Error::InvalidResponse { response_raw, .. } => Some(response_raw),
            _ => None,
        }
    }
}

/// Configuration errors, raised synchronously before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required credential field was absent or empty.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A credential field was present but malformed.
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A base URL could not be used.
    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
}

/// The token endpoint answered without an `access_token`.
#[derive(Debug, Error)]
#[error("HTTP {status_code}: {response_raw}")]
pub struct AuthError {
    /// HTTP status code of the token response.
    pub status_code: u16,
    /// Raw body of the token response.
    pub response_raw: String,
}

/// An item endpoint answered with a non-200 status.
#[derive(Debug, Error)]
#[error("HTTP {status_code}: {response_raw}")]
pub struct ApiError {
    /// HTTP status code of the item response.
    pub status_code: u16,
    /// Raw body of the item response.
    pub response_raw: String,
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {message}")]
    Builder { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            TransportError::Builder {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}
