// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the container's laws over arbitrary JSON section contents.

mod common;

use clusterstate_config::adapters::JsonCodec;
use clusterstate_config::domain::{ClusterStateConfig, Section, SectionMap};
use clusterstate_config::ports::ConfigCodec;
use common::{read_json, temp_config_path, top_level_keys};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
            .prop_map(Value::from),
        "\\PC{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_section() -> impl Strategy<Value = SectionMap> {
    prop::collection::btree_map("\\PC{0,10}", arb_json(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

fn arb_config() -> impl Strategy<Value = ClusterStateConfig> {
    (arb_section(), arb_section(), arb_section())
        .prop_map(|(g, a, p)| ClusterStateConfig::from_sections(g, a, p))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // load(save(C)) == C
    #[test]
    fn test_file_round_trip(config in arb_config()) {
        let (_dir, path) = temp_config_path("cluster_state.json");
        config.save(&path).unwrap();

        let restored = ClusterStateConfig::load(&path).unwrap();
        prop_assert_eq!(restored, config);
    }

    #[test]
    fn test_saved_file_has_canonical_keys(config in arb_config()) {
        let (_dir, path) = temp_config_path("cluster_state.json");
        config.save(&path).unwrap();

        let keys = top_level_keys(&read_json(&path));
        prop_assert_eq!(keys, vec!["general_config", "algo_specific_config", "prediction_config"]);
    }
}

proptest! {
    #[test]
    fn test_codec_round_trip(config in arb_config()) {
        let codec = JsonCodec::new();
        let text = codec.encode(&config).unwrap();
        prop_assert_eq!(codec.decode(&text).unwrap(), config);
    }

    // Present sections are taken unchanged, missing ones come back empty
    #[test]
    fn test_default_fill(
        general in prop::option::of(arb_section()),
        algo in prop::option::of(arb_section()),
        prediction in prop::option::of(arb_section()),
    ) {
        let mut input = SectionMap::new();
        let supplied = [
            (Section::General, general),
            (Section::AlgoSpecific, algo),
            (Section::Prediction, prediction),
        ];
        for (section, contents) in &supplied {
            if let Some(contents) = contents {
                input.insert(section.as_str().to_string(), Value::Object(contents.clone()));
            }
        }

        let config = ClusterStateConfig::from_map(input).unwrap();
        for (section, contents) in supplied {
            let expected = contents.unwrap_or_default();
            prop_assert_eq!(config.section(section), &expected);
        }
    }

    #[test]
    fn test_unknown_section_names_rejected(name in "\\PC{0,24}") {
        prop_assume!(!Section::is_valid_name(&name));

        let mut config = ClusterStateConfig::new();
        prop_assert!(config.get(&name).unwrap_err().is_invalid_section());
        prop_assert!(config.get_mut(&name).unwrap_err().is_invalid_section());
        prop_assert!(config.set(&name, SectionMap::new()).unwrap_err().is_invalid_section());
        prop_assert_eq!(config, ClusterStateConfig::new());
    }

    #[test]
    fn test_set_overwrites(first in arb_section(), second in arb_section()) {
        for section in Section::ALL {
            let mut config = ClusterStateConfig::new();
            config.set(section.as_str(), first.clone()).unwrap();
            config.set(section.as_str(), second.clone()).unwrap();
            prop_assert_eq!(config.get(section.as_str()).unwrap(), &second);
        }
    }
}
