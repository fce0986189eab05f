// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for fluent-request
//!
//! Two families matter to callers. Validation errors come back from builder
//! mutators at the call site. Transport errors never reach the caller of
//! `send()`; they are folded into the failure sentinel of a
//! [`Response`](crate::Response) and logged.

use thiserror::Error;

/// Result type alias for fluent-request operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fluent-request
#[derive(Error, Debug)]
pub enum Error {
    /// A builder argument was empty or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request asks for something its method cannot carry
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Dispatch deadline elapsed
    #[error("Request timed out after {duration_ms}ms: {url}")]
    Timeout { duration_ms: u64, url: String },

    /// Transport could not be configured (bad proxy, client build failure)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The shared dispatch runtime is unavailable
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create an unsupported configuration error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::UnsupportedConfiguration(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(duration_ms: u64, url: impl Into<String>) -> Self {
        Error::Timeout {
            duration_ms,
            url: url.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error was raised by a builder mutator
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::UnsupportedConfiguration(_)
        )
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this error happened while talking to the network
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Url(_) | Error::Timeout { .. } | Error::Config(_)
        )
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
