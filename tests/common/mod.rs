// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

#![allow(dead_code)]

use clusterstate_config::domain::{ClusterStateConfig, SectionMap};
use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// Creates a temporary file holding `content` verbatim.
///
/// The file is deleted when the returned handle is dropped.
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Returns a fresh temporary directory and a config path inside it.
pub fn temp_config_path(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    (dir, path)
}

/// Converts a JSON object literal into a section map.
pub fn section(value: Value) -> SectionMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

/// Reads a file back as a JSON value.
pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Returns the top-level keys of a JSON object in file order.
pub fn top_level_keys(value: &Value) -> Vec<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

/// A container resembling a real recommender configuration.
pub fn recommender_config() -> ClusterStateConfig {
    ClusterStateConfig::from_sections(
        section(json!({
            "cluster_name": "eastus-prod-07",
            "window_minutes": 60,
            "dry_run": false
        })),
        section(json!({
            "algorithm": "multi_armed_bandit",
            "epsilon": 0.1,
            "arms": [2, 4, 8, 16],
            "reward": { "metric": "cpu_utilization", "target": 0.7 }
        })),
        section(json!({
            "enabled": true,
            "model": "seasonal_naive",
            "forecast_horizon": 24,
            "confidence": null
        })),
    )
}
