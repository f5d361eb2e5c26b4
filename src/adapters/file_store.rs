// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed configuration store adapter.
//!
//! This module provides [`FileStore`], which reads and writes a
//! [`ClusterStateConfig`] from a single file using a [`ConfigCodec`].

use crate::adapters::JsonCodec;
use crate::domain::{ClusterStateConfig, ConfigError, Result};
use crate::ports::{ConfigCodec, ConfigStore};
use directories::ProjectDirs;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Maximum allowed file size for configuration files (10MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used by [`FileStore::from_default_location`].
pub const DEFAULT_CONFIG_FILE_NAME: &str = "cluster_state_config.json";

/// Configuration store backed by a single file.
///
/// Saves are atomic: content is written to a temporary file next to the destination,
/// flushed to disk, and then renamed over it. A failed save leaves any previous file
/// intact. When the path is a symlink, the file it points to is replaced and the link
/// is kept.
///
/// Loads read the whole file and refuse files larger than [`MAX_CONFIG_FILE_SIZE`].
///
/// # Examples
///
/// ```rust,no_run
/// use clusterstate_config::adapters::FileStore;
/// use clusterstate_config::ports::ConfigStore;
///
/// let store = FileStore::new("/var/lib/recommender/cluster_state.json");
/// let mut config = store.load().unwrap();
/// config
///     .general_config_mut()
///     .insert("cluster".to_string(), "eastus-01".into());
/// store.save(&config).unwrap();
/// ```
pub struct FileStore {
    path: PathBuf,
    codec: Box<dyn ConfigCodec>,
}

impl FileStore {
    /// Creates a JSON file store for `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_codec(path, Box::new(JsonCodec::new()))
    }

    /// Creates a file store for `path` using the given codec.
    pub fn with_codec<P: AsRef<Path>>(path: P, codec: Box<dyn ConfigCodec>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            codec,
        }
    }

    /// Creates a file store whose codec is chosen from the file extension.
    ///
    /// `.json` selects [`JsonCodec`]; `.yaml` and `.yml` select
    /// `YamlCodec` when the `yaml` feature is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if no codec handles the extension.
    pub fn for_extension<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        for codec in available_codecs() {
            if codec.supports_extension(extension) {
                return Ok(Self::with_codec(path, codec));
            }
        }

        Err(ConfigError::parse(format!(
            "No configuration codec for extension '{}' of {}",
            extension,
            path.display()
        )))
    }

    /// Creates a JSON file store in the OS-appropriate configuration directory.
    ///
    /// The file is `<config dir>/cluster_state_config.json`, where the directory comes
    /// from the `directories` crate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if no home directory can be determined.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use clusterstate_config::adapters::FileStore;
    ///
    /// let store = FileStore::from_default_location("recommender", "com.example").unwrap();
    /// println!("{}", store.path().display());
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::ReadError {
                path: PathBuf::from(DEFAULT_CONFIG_FILE_NAME),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "Failed to determine project directories",
                ),
            })?;

        Ok(Self::new(proj_dirs.config_dir().join(DEFAULT_CONFIG_FILE_NAME)))
    }

    /// Returns the path to the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the codec used by this store.
    pub fn codec(&self) -> &dyn ConfigCodec {
        self.codec.as_ref()
    }

    fn read_error(&self, source: io::Error) -> ConfigError {
        ConfigError::ReadError {
            path: self.path.clone(),
            source,
        }
    }

    fn read_content(&self) -> Result<String> {
        let metadata = fs::metadata(&self.path).map_err(|e| self.read_error(e))?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(self.read_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
            )));
        }

        let bytes = fs::read(&self.path).map_err(|e| self.read_error(e))?;

        String::from_utf8(bytes).map_err(|e| ConfigError::ParseError {
            message: format!("Configuration file is not valid UTF-8: {}", self.path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path that a save actually replaces: symlinks are followed to their target.
    fn write_target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn write_atomically(&self, content: &str) -> io::Result<()> {
        let target = self.write_target();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            tmp.write_all(b"\n")?;
        }
        tmp.flush()?;

        // Keep the permissions of a file being replaced.
        if let Ok(existing) = fs::metadata(&target) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("codec", &self.codec.name())
            .finish()
    }
}

impl ConfigStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<ClusterStateConfig> {
        let content = self.read_content()?;
        let config = self.codec.decode(&content)?;

        tracing::debug!(
            "Loaded configuration from {} ({} bytes, codec {})",
            self.path.display(),
            content.len(),
            self.codec.name()
        );
        Ok(config)
    }

    fn save(&self, config: &ClusterStateConfig) -> Result<()> {
        let content = match self.codec.encode(config) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(
                    "Error encoding configuration for {}: {}",
                    self.path.display(),
                    e
                );
                return Err(ConfigError::write(&self.path, e));
            }
        };

        if let Err(e) = self.write_atomically(&content) {
            tracing::error!(
                "Error writing configuration file {}: {}",
                self.path.display(),
                e
            );
            return Err(ConfigError::write(&self.path, e));
        }

        tracing::debug!(
            "Saved configuration to {} ({} bytes, codec {})",
            self.path.display(),
            content.len(),
            self.codec.name()
        );
        Ok(())
    }
}

fn available_codecs() -> Vec<Box<dyn ConfigCodec>> {
    #[allow(unused_mut)]
    let mut codecs: Vec<Box<dyn ConfigCodec>> = vec![Box::new(JsonCodec::new())];
    #[cfg(feature = "yaml")]
    codecs.push(Box::new(crate::adapters::YamlCodec::new()));
    codecs
}
