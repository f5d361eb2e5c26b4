// SPDX-License-Identifier: MIT OR Apache-2.0

//! File persistence example.
//!
//! Saves a configuration to a file, loads it back, and shows that unknown top-level
//! keys from a hand-edited file are dropped on the next save.
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example round_trip
//! ```

use clusterstate_config::prelude::*;
use serde_json::json;
use std::fs;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cluster_state.json");

    let mut config = ClusterStateConfig::new();
    config
        .general_config_mut()
        .insert("cluster_name".to_string(), json!("westus-dev-01"));
    config
        .prediction_config_mut()
        .insert("enabled".to_string(), json!(true));

    config.save(&path)?;
    println!("Wrote {}:\n{}", path.display(), fs::read_to_string(&path)?);

    let restored = ClusterStateConfig::load(&path)?;
    println!("Round trip equal: {}", restored == config);

    // A hand-edited file with an extra key
    fs::write(
        &path,
        r#"{"general_config": {"cluster_name": "edited"}, "notes": "ignored"}"#,
    )?;
    let edited = ClusterStateConfig::load(&path)?;
    edited.save(&path)?;
    println!("After re-save:\n{}", fs::read_to_string(&path)?);

    // Loading something that is not an object fails with a parse error
    fs::write(&path, "[1, 2, 3]")?;
    match ClusterStateConfig::load(&path) {
        Err(e) if e.is_parse_error() => println!("✓ rejected array file: {}", e),
        other => println!("unexpected result: {:?}", other),
    }

    Ok(())
}
