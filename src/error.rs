// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Transport, decode and property-model failures are kept apart so callers
//! can tell "the network broke" from "the service sent something we could
//! not read".

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient. Retrying is left to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }

    /// A short suggestion for the person running the command, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_not_found() {
            Some("check the database ID and that the database is shared with the integration")
        } else if self.is_retryable() {
            Some("the service reported a transient failure; try again later")
        } else {
            None
        }
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// The database service operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetDatabase,
    ListDatabases,
    QueryDatabase,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetDatabase => write!(f, "get database"),
            Self::ListDatabases => write!(f, "list databases"),
            Self::QueryDatabase => write!(f, "query database"),
        }
    }
}

/// A property payload that does not match its discriminant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedPropertyError {
    #[error("property is not a JSON object")]
    NotAnObject,

    #[error("property has no 'type' discriminant")]
    MissingType,

    #[error("property of type '{kind}' has no '{kind}' payload")]
    MissingPayload { kind: String },

    #[error("property of type '{kind}' has a malformed payload: {reason}")]
    InvalidPayload { kind: String, reason: String },
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// The transport could not complete the exchange.
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not decode into the expected entity.
    #[error("Failed to decode response: {source}\nBody: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Malformed property: {0}")]
    MalformedProperty(#[from] MalformedPropertyError),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),

    /// Context wrapper naming the operation and its target.
    #[error("Failed to {operation} {target}: {source}")]
    Operation {
        operation: Operation,
        target: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wraps this error with the operation and target it occurred in.
    pub fn during(self, operation: Operation, target: impl Into<String>) -> Self {
        AppError::Operation {
            operation,
            target: target.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error, with any operation context peeled off.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Operation { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// The Notion error code, if the service itself rejected the request.
    pub fn service_code(&self) -> Option<&NotionErrorCode> {
        match self.root_cause() {
            AppError::NotionService { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode {
            source: err,
            body: String::new(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
