// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the cluster state configuration crate.
//!
//! This module defines the errors that can occur while building, accessing, loading,
//! or saving a [`ClusterStateConfig`](crate::domain::ClusterStateConfig).
//! All errors use `thiserror` for proper error handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Every failure is reported synchronously to the immediate caller and nothing is
/// retried internally. The enum is marked `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use clusterstate_config::domain::errors::ConfigError;
///
/// fn lookup(name: &str) -> Result<(), ConfigError> {
///     Err(ConfigError::InvalidSection {
///         name: name.to_string(),
///     })
/// }
///
/// assert!(lookup("bogus").unwrap_err().is_invalid_section());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    ReadError {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration content is not valid, or is not an object at the top level.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serializing or writing the configuration file failed.
    #[error("Failed to write configuration file '{}': {source}", .path.display())]
    WriteError {
        /// The path that was being written
        path: PathBuf,
        /// The underlying I/O or encoding error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A section name outside the fixed set of three was requested or set.
    #[error(
        "Invalid section: {name} (expected one of general_config, algo_specific_config, prediction_config)"
    )]
    InvalidSection {
        /// The rejected section name
        name: String,
    },

    /// A codec failed to encode the configuration into text.
    #[error("Failed to serialize configuration: {message}")]
    SerializeError {
        /// The error message
        message: String,
        /// The underlying encoding error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `ParseError` with no underlying cause.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `WriteError` wrapping any error as its cause.
    pub fn write<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ConfigError::WriteError {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns `true` if this is a `ReadError`.
    pub fn is_read_error(&self) -> bool {
        matches!(self, ConfigError::ReadError { .. })
    }

    /// Returns `true` if this is a `ParseError`.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::ParseError { .. })
    }

    /// Returns `true` if this is a `WriteError`.
    pub fn is_write_error(&self) -> bool {
        matches!(self, ConfigError::WriteError { .. })
    }

    /// Returns `true` if this is an `InvalidSection` error.
    pub fn is_invalid_section(&self) -> bool {
        matches!(self, ConfigError::InvalidSection { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
