// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three-section cluster state configuration container.
//!
//! [`ClusterStateConfig`] partitions configuration into general, algorithm-specific,
//! and prediction settings. Each section is a free-form JSON object. The container can
//! be built empty, from an in-memory mapping, or from a file, and written back to a
//! file as a single JSON object with exactly three top-level keys.

use crate::adapters::{FileStore, JsonCodec};
use crate::domain::errors::{ConfigError, Result};
use crate::domain::section::Section;
use crate::ports::{ConfigCodec, ConfigStore};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// The contents of a single section: string keys mapped to arbitrary JSON values.
///
/// Key insertion order is preserved, so a section written to disk keeps the order in
/// which it was read or built.
pub type SectionMap = serde_json::Map<String, Value>;

/// A configuration container holding exactly three sections.
///
/// The three sections are always present. A section that was not supplied at
/// construction is an empty map.
///
/// # Live access
///
/// [`get_mut`](Self::get_mut) and the `*_mut` accessors hand out a mutable borrow of
/// the container's own map, not a copy. Changes made through them are changes to the
/// container and are persisted by the next [`save`](Self::save).
///
/// # Examples
///
/// ```
/// use clusterstate_config::domain::ClusterStateConfig;
/// use serde_json::json;
///
/// let mut config = ClusterStateConfig::from_value(json!({
///     "general_config": { "cluster": "eastus-01" }
/// }))
/// .unwrap();
///
/// assert_eq!(config.get("general_config").unwrap()["cluster"], "eastus-01");
/// assert!(config.get("algo_specific_config").unwrap().is_empty());
///
/// config
///     .get_mut("prediction_config")
///     .unwrap()
///     .insert("window".to_string(), json!(30));
/// assert_eq!(config.prediction_config()["window"], 30);
///
/// assert!(config.get("bogus").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClusterStateConfig {
    general_config: SectionMap,
    algo_specific_config: SectionMap,
    prediction_config: SectionMap,
}

impl ClusterStateConfig {
    /// Creates a container with all three sections empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container from three already-built sections.
    pub fn from_sections(
        general_config: SectionMap,
        algo_specific_config: SectionMap,
        prediction_config: SectionMap,
    ) -> Self {
        Self {
            general_config,
            algo_specific_config,
            prediction_config,
        }
    }

    /// Creates a container from a mapping keyed by section name.
    ///
    /// Each of `general_config`, `algo_specific_config` and `prediction_config` is
    /// taken from `sections` if present, and left empty otherwise. Other keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if a section key is present but its value
    /// is not a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use clusterstate_config::domain::{ClusterStateConfig, SectionMap};
    /// use serde_json::json;
    ///
    /// let mut sections = SectionMap::new();
    /// sections.insert("general_config".to_string(), json!({ "a": 1 }));
    ///
    /// let config = ClusterStateConfig::from_map(sections).unwrap();
    /// assert_eq!(config.general_config()["a"], 1);
    /// assert!(config.algo_specific_config().is_empty());
    /// assert!(config.prediction_config().is_empty());
    /// ```
    pub fn from_map(mut sections: SectionMap) -> Result<Self> {
        let mut config = Self::new();
        for section in Section::ALL {
            match sections.remove(section.as_str()) {
                None => {}
                Some(Value::Object(map)) => {
                    config.set_section(section, map);
                }
                Some(other) => {
                    return Err(ConfigError::parse(format!(
                        "section '{}' must be a JSON object, found {}",
                        section,
                        json_kind(&other)
                    )));
                }
            }
        }

        if !sections.is_empty() {
            let ignored: Vec<&str> = sections.keys().map(String::as_str).collect();
            tracing::warn!(
                "Ignoring unknown top-level configuration keys: {}",
                ignored.join(", ")
            );
        }

        Ok(config)
    }

    /// Creates a container from a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if `value` is not a JSON object, or if one
    /// of its section keys does not hold an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(ConfigError::parse(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Loads a container from a JSON file.
    ///
    /// The whole file is read into memory. Files over 10 MiB are refused rather than
    /// read.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] if the file cannot be opened or read, or is larger
    ///   than 10 MiB.
    /// - [`ConfigError::ParseError`] if the content is not valid JSON or its top level
    ///   is not an object.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use clusterstate_config::domain::ClusterStateConfig;
    ///
    /// let config = ClusterStateConfig::load("/etc/recommender/cluster_state.json").unwrap();
    /// println!("{:?}", config.general_config());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        FileStore::new(path).load()
    }

    /// Writes the container to `path` as 4-space indented JSON.
    ///
    /// The file is created or replaced. Its top-level object always holds exactly
    /// `general_config`, `algo_specific_config` and `prediction_config`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteError`] carrying the underlying cause if encoding or
    /// writing fails. An existing file at `path` is left untouched in that case.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileStore::new(path).save(self)
    }

    /// Encodes the container as the same 4-space indented JSON that [`save`](Self::save)
    /// writes.
    pub fn to_json_string(&self) -> Result<String> {
        JsonCodec::new().encode(self)
    }

    /// Returns the named section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSection`] if `name` is not one of the three
    /// section names.
    pub fn get(&self, name: &str) -> Result<&SectionMap> {
        let section: Section = name.parse()?;
        Ok(self.section(section))
    }

    /// Returns a mutable borrow of the named section.
    ///
    /// Modifying the returned map modifies the container.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSection`] if `name` is not one of the three
    /// section names.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut SectionMap> {
        let section: Section = name.parse()?;
        Ok(self.section_mut(section))
    }

    /// Returns the named section, or `default` if `name` is not a section name.
    ///
    /// # Examples
    ///
    /// ```
    /// use clusterstate_config::domain::{ClusterStateConfig, SectionMap};
    ///
    /// let config = ClusterStateConfig::new();
    /// let fallback = SectionMap::new();
    /// assert!(config.get_or_default("unknown_section", &fallback).is_empty());
    /// ```
    pub fn get_or_default<'a>(&'a self, name: &str, default: &'a SectionMap) -> &'a SectionMap {
        match Section::from_name(name) {
            Some(section) => self.section(section),
            None => default,
        }
    }

    /// Replaces the named section with `value`.
    ///
    /// This is a full overwrite: keys of the previous section that are absent from
    /// `value` are gone afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSection`] if `name` is not one of the three
    /// section names. The container is unchanged in that case.
    pub fn set(&mut self, name: &str, value: SectionMap) -> Result<()> {
        let section: Section = name.parse()?;
        self.set_section(section, value);
        Ok(())
    }

    /// Returns the given section.
    pub fn section(&self, section: Section) -> &SectionMap {
        match section {
            Section::General => &self.general_config,
            Section::AlgoSpecific => &self.algo_specific_config,
            Section::Prediction => &self.prediction_config,
        }
    }

    /// Returns a mutable borrow of the given section.
    pub fn section_mut(&mut self, section: Section) -> &mut SectionMap {
        match section {
            Section::General => &mut self.general_config,
            Section::AlgoSpecific => &mut self.algo_specific_config,
            Section::Prediction => &mut self.prediction_config,
        }
    }

    /// Replaces the given section, returning the previous contents.
    pub fn set_section(&mut self, section: Section, value: SectionMap) -> SectionMap {
        std::mem::replace(self.section_mut(section), value)
    }

    /// General settings.
    pub fn general_config(&self) -> &SectionMap {
        &self.general_config
    }

    /// Mutable general settings.
    pub fn general_config_mut(&mut self) -> &mut SectionMap {
        &mut self.general_config
    }

    /// Algorithm-specific settings.
    pub fn algo_specific_config(&self) -> &SectionMap {
        &self.algo_specific_config
    }

    /// Mutable algorithm-specific settings.
    pub fn algo_specific_config_mut(&mut self) -> &mut SectionMap {
        &mut self.algo_specific_config
    }

    /// Prediction settings.
    pub fn prediction_config(&self) -> &SectionMap {
        &self.prediction_config
    }

    /// Mutable prediction settings.
    pub fn prediction_config_mut(&mut self) -> &mut SectionMap {
        &mut self.prediction_config
    }

    /// Iterates over the sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &SectionMap)> + '_ {
        Section::ALL.into_iter().map(move |s| (s, self.section(s)))
    }

    /// Returns `true` if all three sections are empty.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, map)| map.is_empty())
    }

    /// Returns the whole container as a single JSON object keyed by section name.
    pub fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl TryFrom<Value> for ClusterStateConfig {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<ClusterStateConfig> for Value {
    fn from(config: ClusterStateConfig) -> Self {
        let sections = [
            (Section::General, config.general_config),
            (Section::AlgoSpecific, config.algo_specific_config),
            (Section::Prediction, config.prediction_config),
        ];
        let map: SectionMap = sections
            .into_iter()
            .map(|(section, contents)| (section.as_str().to_string(), Value::Object(contents)))
            .collect();
        Value::Object(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> SectionMap {
        match value {
            Value::Object(m) => m,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_new_is_empty() {
        let config = ClusterStateConfig::new();
        assert!(config.is_empty());
        for section in Section::ALL {
            assert!(config.section(section).is_empty());
        }
    }

    #[test]
    fn test_from_map_fills_missing_sections() {
        let config = ClusterStateConfig::from_map(map(json!({
            "general_config": { "a": 1 }
        })))
        .unwrap();

        assert_eq!(config.general_config(), &map(json!({ "a": 1 })));
        assert!(config.algo_specific_config().is_empty());
        assert!(config.prediction_config().is_empty());
    }

    #[test]
    fn test_from_map_all_sections() {
        let config = ClusterStateConfig::from_map(map(json!({
            "general_config": { "cluster": "c1" },
            "algo_specific_config": { "algorithm": "multi_armed_bandit", "arms": [1, 2, 4] },
            "prediction_config": { "horizon": 24, "enabled": true }
        })))
        .unwrap();

        assert_eq!(config.general_config()["cluster"], "c1");
        assert_eq!(config.algo_specific_config()["arms"], json!([1, 2, 4]));
        assert_eq!(config.prediction_config()["enabled"], true);
    }

    #[test]
    fn test_from_map_ignores_unknown_keys() {
        let config = ClusterStateConfig::from_map(map(json!({
            "general_config": {},
            "legacy_config": { "x": 1 }
        })))
        .unwrap();

        assert!(config.is_empty());
        assert!(config.get("legacy_config").is_err());
    }

    #[test]
    fn test_from_map_rejects_non_object_section() {
        let err = ClusterStateConfig::from_map(map(json!({
            "prediction_config": [1, 2, 3]
        })))
        .unwrap_err();

        assert!(err.is_parse_error());
        assert!(err.to_string().contains("prediction_config"));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        for value in [json!("not an object"), json!([1, 2, 3]), json!(null), json!(7)] {
            let err = ClusterStateConfig::from_value(value).unwrap_err();
            assert!(err.is_parse_error());
        }
    }

    #[test]
    fn test_get_valid_sections() {
        let config = ClusterStateConfig::new();
        for section in Section::ALL {
            assert!(config.get(section.as_str()).is_ok());
        }
    }

    #[test]
    fn test_get_invalid_section() {
        let config = ClusterStateConfig::new();
        let err = config.get("bogus").unwrap_err();
        assert!(err.is_invalid_section());
    }

    #[test]
    fn test_get_mut_is_live() {
        let mut config = ClusterStateConfig::new();
        config
            .get_mut("algo_specific_config")
            .unwrap()
            .insert("learning_rate".to_string(), json!(0.01));

        assert_eq!(config.algo_specific_config()["learning_rate"], 0.01);
    }

    #[test]
    fn test_get_mut_invalid_section() {
        let mut config = ClusterStateConfig::new();
        assert!(config.get_mut("bogus").unwrap_err().is_invalid_section());
    }

    #[test]
    fn test_get_or_default() {
        let mut config = ClusterStateConfig::new();
        config.general_config_mut().insert("a".to_string(), json!(1));

        let fallback = map(json!({ "fallback": true }));
        assert_eq!(config.get_or_default("general_config", &fallback)["a"], 1);
        assert_eq!(config.get_or_default("bogus", &fallback), &fallback);
    }

    #[test]
    fn test_set_overwrites_not_merges() {
        let mut config = ClusterStateConfig::new();
        config
            .set("general_config", map(json!({ "a": 1, "b": 2 })))
            .unwrap();
        config.set("general_config", map(json!({ "b": 3 }))).unwrap();

        assert_eq!(config.general_config(), &map(json!({ "b": 3 })));
    }

    #[test]
    fn test_set_invalid_section_leaves_config_unchanged() {
        let mut config = ClusterStateConfig::new();
        let err = config.set("bogus", SectionMap::new()).unwrap_err();
        assert!(err.is_invalid_section());
        assert_eq!(config, ClusterStateConfig::new());
    }

    #[test]
    fn test_set_section_returns_previous() {
        let mut config = ClusterStateConfig::new();
        config.set_section(Section::Prediction, map(json!({ "old": 1 })));
        let previous = config.set_section(Section::Prediction, map(json!({ "new": 2 })));

        assert_eq!(previous, map(json!({ "old": 1 })));
        assert_eq!(config.prediction_config(), &map(json!({ "new": 2 })));
    }

    #[test]
    fn test_iter_canonical_order() {
        let config = ClusterStateConfig::new();
        let sections: Vec<Section> = config.iter().map(|(s, _)| s).collect();
        assert_eq!(sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_to_value_has_exactly_three_keys() {
        let config = ClusterStateConfig::new();
        let value = config.to_value();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["general_config", "algo_specific_config", "prediction_config"]
        );
    }

    #[test]
    fn test_value_conversion_round_trip() {
        let original = ClusterStateConfig::from_sections(
            map(json!({ "nested": { "deep": [1, "two", null] } })),
            map(json!({ "k": false })),
            SectionMap::new(),
        );

        let value = Value::from(original.clone());
        let restored = ClusterStateConfig::try_from(value).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_to_value_matches_value_conversion() {
        let config = ClusterStateConfig::from_sections(
            map(json!({ "a": 1 })),
            map(json!({ "b": [true] })),
            map(json!({ "c": { "d": null } })),
        );

        let value = config.to_value();
        assert_eq!(value, Value::from(config));
        assert_eq!(value["algo_specific_config"]["b"], json!([true]));
    }

    #[test]
    fn test_to_json_string_uses_four_space_indent() {
        let mut config = ClusterStateConfig::new();
        config.general_config_mut().insert("a".to_string(), json!(1));

        let text = config.to_json_string().unwrap();
        assert!(text.starts_with("{\n    \"general_config\": {\n        \"a\": 1\n    },"));
    }
}
