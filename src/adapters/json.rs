// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON configuration codec adapter.
//!
//! This module provides the codec for the on-disk JSON format: one object with the
//! keys `general_config`, `algo_specific_config` and `prediction_config`, written with
//! 4-space indentation.

use crate::domain::{ClusterStateConfig, ConfigError, Result};
use crate::ports::ConfigCodec;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used when writing configuration files.
const JSON_INDENT: &[u8] = b"    ";

/// JSON codec implementation.
///
/// Decoding accepts any valid JSON whose top level is an object; indentation is not
/// required. Encoding always produces 4-space indented output in canonical section
/// order.
///
/// # Examples
///
/// ```rust
/// use clusterstate_config::adapters::JsonCodec;
/// use clusterstate_config::ports::ConfigCodec;
///
/// let codec = JsonCodec::new();
/// let config = codec
///     .decode(r#"{"algo_specific_config": {"algorithm": "bandit"}}"#)
///     .unwrap();
/// assert_eq!(config.algo_specific_config()["algorithm"], "bandit");
///
/// assert!(codec.decode("[1, 2, 3]").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Creates a new JSON codec.
    pub fn new() -> Self {
        JsonCodec
    }
}

impl ConfigCodec for JsonCodec {
    fn name(&self) -> &str {
        "json"
    }

    fn decode(&self, content: &str) -> Result<ClusterStateConfig> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        ClusterStateConfig::from_value(value)
    }

    fn encode(&self, config: &ClusterStateConfig) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

        config
            .serialize(&mut serializer)
            .map_err(|e| ConfigError::SerializeError {
                message: format!("Failed to encode JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        String::from_utf8(buf).map_err(|e| ConfigError::SerializeError {
            message: "Encoded JSON is not valid UTF-8".to_string(),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
