// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the configuration container, the fixed set of section names,
//! and the crate's error type.

pub mod cluster_state_config;
pub mod errors;
pub mod section;

// Re-export commonly used types
pub use cluster_state_config::{ClusterStateConfig, SectionMap};
pub use errors::{ConfigError, Result};
pub use section::Section;
