// SPDX-License-Identifier: MIT OR Apache-2.0

//! A three-section configuration container for cluster state recommenders.
//!
//! This crate provides [`ClusterStateConfig`](domain::ClusterStateConfig), which holds
//! the configuration consumed by a recommendation system in three named sections:
//!
//! - `general_config`: general settings
//! - `algo_specific_config`: algorithm-specific settings
//! - `prediction_config`: prediction settings
//!
//! Each section is a free-form JSON object. The container is persisted as a single
//! human-readable JSON file with exactly those three top-level keys.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ClusterStateConfig`, `Section`, errors)
//! - **Ports**: Trait definitions (`ConfigCodec`, `ConfigStore`)
//! - **Adapters**: Implementations (`JsonCodec`, `YamlCodec`, `FileStore`)
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML codec
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clusterstate_config::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<()> {
//! let mut config = ClusterStateConfig::load("cluster_state.json")?;
//!
//! config
//!     .get_mut("algo_specific_config")?
//!     .insert("epsilon".to_string(), json!(0.05));
//!
//! config.save("cluster_state.json")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileStore, JsonCodec};
    pub use crate::domain::{ClusterStateConfig, ConfigError, Result, Section, SectionMap};
    pub use crate::ports::{ConfigCodec, ConfigStore};

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlCodec;
}
