// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the port through which a
//! [`ClusterStateConfig`] is loaded from and persisted to durable storage.

use crate::domain::{ClusterStateConfig, Result};

/// A trait for places a configuration can be loaded from and saved to.
///
/// A store persists the whole container as one unit: `save` writes all three sections,
/// and `load` reads all three back.
///
/// # Examples
///
/// ```rust
/// use clusterstate_config::domain::{ClusterStateConfig, Result};
/// use clusterstate_config::ports::ConfigStore;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct MemoryStore(Mutex<Option<ClusterStateConfig>>);
///
/// impl ConfigStore for MemoryStore {
///     fn name(&self) -> &str {
///         "memory"
///     }
///
///     fn load(&self) -> Result<ClusterStateConfig> {
///         Ok(self.0.lock().unwrap().clone().unwrap_or_default())
///     }
///
///     fn save(&self, config: &ClusterStateConfig) -> Result<()> {
///         *self.0.lock().unwrap() = Some(config.clone());
///         Ok(())
///     }
/// }
///
/// let store = MemoryStore::default();
/// store.save(&ClusterStateConfig::new()).unwrap();
/// assert!(store.load().unwrap().is_empty());
/// ```
pub trait ConfigStore: Send + Sync {
    /// Returns a short identifier for the store, used in log messages.
    fn name(&self) -> &str;

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`](crate::domain::ConfigError::ReadError) if the
    ///   underlying storage cannot be read.
    /// - [`ConfigError::ParseError`](crate::domain::ConfigError::ParseError) if the
    ///   stored content is malformed.
    fn load(&self) -> Result<ClusterStateConfig>;

    /// Persists the configuration, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteError`](crate::domain::ConfigError::WriteError)
    /// carrying the underlying cause. Implementations must not report success for a
    /// partial write.
    fn save(&self, config: &ClusterStateConfig) -> Result<()>;
}
