// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing codec and store implementations.
//!
//! This module contains concrete implementations of the traits defined in the ports
//! layer: the JSON and YAML codecs, and the file-backed store.

pub mod file_store;
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use file_store::FileStore;
pub use json::JsonCodec;
#[cfg(feature = "yaml")]
pub use yaml::YamlCodec;
