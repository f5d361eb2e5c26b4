// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed set of configuration section names.
//!
//! A [`ClusterStateConfig`](crate::domain::ClusterStateConfig) always holds exactly
//! three sections. `Section` names them, so code that knows which section it wants can
//! address it without going through string matching.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the three named partitions of a cluster state configuration.
///
/// # Examples
///
/// ```
/// use clusterstate_config::domain::Section;
///
/// let section: Section = "prediction_config".parse().unwrap();
/// assert_eq!(section, Section::Prediction);
/// assert_eq!(section.as_str(), "prediction_config");
///
/// assert!("bogus".parse::<Section>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// General settings (`general_config`).
    General,
    /// Algorithm-specific settings (`algo_specific_config`).
    AlgoSpecific,
    /// Prediction settings (`prediction_config`).
    Prediction,
}

impl Section {
    /// All sections in canonical file order.
    pub const ALL: [Section; 3] = [Section::General, Section::AlgoSpecific, Section::Prediction];

    /// Returns the canonical name of the section as it appears in the file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::General => "general_config",
            Section::AlgoSpecific => "algo_specific_config",
            Section::Prediction => "prediction_config",
        }
    }

    /// Looks up a section by its canonical name.
    ///
    /// Returns `None` for anything outside the fixed set. Matching is exact and
    /// case-sensitive.
    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Returns `true` if `name` is one of the three canonical section names.
    pub fn is_valid_name(name: &str) -> bool {
        Section::from_name(name).is_some()
    }
}

impl FromStr for Section {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Section::from_name(s).ok_or_else(|| ConfigError::InvalidSection {
            name: s.to_string(),
        })
    }
}

impl TryFrom<&str> for Section {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl AsRef<str> for Section {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
