// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration codec adapter.
//!
//! Section contents are still JSON values; YAML is only the file syntax. Mappings with
//! non-string keys and other YAML-only constructs are rejected on decode.

use crate::domain::{ClusterStateConfig, ConfigError, Result};
use crate::ports::ConfigCodec;

/// YAML codec implementation.
///
/// # Examples
///
/// ```rust
/// use clusterstate_config::adapters::YamlCodec;
/// use clusterstate_config::ports::ConfigCodec;
///
/// let codec = YamlCodec::new();
/// let config = codec.decode("prediction_config:\n  horizon: 24\n").unwrap();
/// assert_eq!(config.prediction_config()["horizon"], 24);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Creates a new YAML codec.
    pub fn new() -> Self {
        YamlCodec
    }
}

impl ConfigCodec for YamlCodec {
    fn name(&self) -> &str {
        "yaml"
    }

    fn decode(&self, content: &str) -> Result<ClusterStateConfig> {
        let value: serde_json::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        ClusterStateConfig::from_value(value)
    }

    fn encode(&self, config: &ClusterStateConfig) -> Result<String> {
        serde_yaml::to_string(config).map_err(|e| ConfigError::SerializeError {
            message: format!("Failed to encode YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
