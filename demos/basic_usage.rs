// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the cluster state configuration crate.
//!
//! This example demonstrates:
//! - Building a configuration from an in-memory mapping
//! - Reading and mutating sections by name
//! - Falling back to a default for unknown sections
//! - Handling invalid section names
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use clusterstate_config::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Cluster State Configuration: Basic Usage ===\n");

    // Example 1: Build from a mapping. Missing sections become empty.
    println!("--- Example 1: From a mapping ---");
    let mapping = json!({
        "general_config": { "cluster_name": "eastus-prod-07", "window_minutes": 60 },
        "algo_specific_config": { "algorithm": "multi_armed_bandit", "epsilon": 0.1 }
    });
    let mut config = ClusterStateConfig::from_value(mapping)?;
    for (section, contents) in config.iter() {
        println!("{}: {} key(s)", section, contents.len());
    }

    // Example 2: Live access to a section
    println!("\n--- Example 2: Mutating a section ---");
    config
        .get_mut("prediction_config")?
        .insert("forecast_horizon".to_string(), json!(24));
    println!(
        "prediction_config.forecast_horizon = {}",
        config.prediction_config()["forecast_horizon"]
    );

    // Example 3: Wholesale replacement
    println!("\n--- Example 3: Replacing a section ---");
    let mut replacement = SectionMap::new();
    replacement.insert("algorithm".to_string(), json!("greedy"));
    config.set("algo_specific_config", replacement)?;
    println!("algo_specific_config = {}", json!(config.algo_specific_config()));

    // Example 4: Lenient lookup
    println!("\n--- Example 4: Unknown section with a default ---");
    let fallback = SectionMap::new();
    let scheduler = config.get_or_default("scheduler_config", &fallback);
    println!("scheduler_config has {} key(s)", scheduler.len());

    // Example 5: Strict lookup
    println!("\n--- Example 5: Invalid section ---");
    match config.get("scheduler_config") {
        Ok(_) => println!("unexpectedly found scheduler_config"),
        Err(e) => println!("✓ rejected: {}", e),
    }

    println!("\n--- Canonical JSON ---");
    println!("{}", config.to_json_string()?);

    Ok(())
}
