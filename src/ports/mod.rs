// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define how a configuration
//! is encoded and where it is stored. These traits are implemented by adapters in the
//! adapters layer.

pub mod codec;
pub mod store;

// Re-export commonly used types
pub use codec::ConfigCodec;
pub use store::ConfigStore;
