// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration codec trait definition.
//!
//! This module defines the `ConfigCodec` trait, which provides an interface for turning
//! the text of a configuration file into a [`ClusterStateConfig`] and back.

use crate::domain::{ClusterStateConfig, Result};

/// A trait for encoding and decoding configuration files.
///
/// Implementations decode text into a [`ClusterStateConfig`], applying the same rules
/// as [`ClusterStateConfig::from_value`]: the top level must be an object, each section
/// key is optional, and unknown keys are ignored. Encoding must emit exactly the three
/// section keys in canonical order.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a store holding a codec can be shared
/// across threads.
///
/// # Examples
///
/// ```rust
/// use clusterstate_config::domain::{ClusterStateConfig, Result};
/// use clusterstate_config::ports::ConfigCodec;
///
/// struct EmptyCodec;
///
/// impl ConfigCodec for EmptyCodec {
///     fn name(&self) -> &str {
///         "empty"
///     }
///
///     fn decode(&self, _content: &str) -> Result<ClusterStateConfig> {
///         Ok(ClusterStateConfig::new())
///     }
///
///     fn encode(&self, _config: &ClusterStateConfig) -> Result<String> {
///         Ok(String::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
///
/// let codec = EmptyCodec;
/// assert!(codec.decode("anything").unwrap().is_empty());
/// ```
pub trait ConfigCodec: Send + Sync {
    /// Returns a short identifier for the codec, such as `"json"`.
    ///
    /// Used in log messages.
    fn name(&self) -> &str;

    /// Decodes configuration text into a container.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`](crate::domain::ConfigError::ParseError) if
    /// the content is malformed or its top level is not a mapping.
    fn decode(&self, content: &str) -> Result<ClusterStateConfig>;

    /// Encodes a container into configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SerializeError`](crate::domain::ConfigError::SerializeError)
    /// if the container cannot be represented in this format.
    fn encode(&self, config: &ClusterStateConfig) -> Result<String>;

    /// Returns the file extensions (without the leading dot) handled by this codec.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one of [`supported_extensions`](Self::supported_extensions).
    ///
    /// The comparison ignores ASCII case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
