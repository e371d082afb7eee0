//! Output format validation integration tests

use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to the built binary
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_trophy-cache"))
}

/// Run on the main fixture with JSON output and parse the report
fn json_report(extra: &[&str]) -> Value {
    let output = Command::new(binary_path())
        .arg("--json")
        .args(extra)
        .arg(fixtures_dir().join("trophies.json"))
        .output()
        .expect("Failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

mod json_output {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_counts_shared_creatures_once() {
        let report = json_report(&[]);

        // two trophies describe the same bee; it is built once
        assert_eq!(
            report["summary"],
            json!({
                "trophies": 5,
                "resolved": 4,
                "not_found": 0,
                "builds": 3,
                "cache_entries": 3,
                "defaults_hash": report["summary"]["defaults_hash"].clone(),
            })
        );
    }

    #[test]
    fn test_anger_time_reported() {
        let report = json_report(&[]);
        let bee = &report["trophies"][0];

        assert_eq!(bee["name"], "Angry Bee");
        assert_eq!(bee["identifier"], "minecraft:bee");
        assert_eq!(bee["entity"]["anger_time"], 200);
        assert_eq!(bee["entity"]["class"], "angerable_mob");
    }

    #[test]
    fn test_bounds_from_block_position() {
        let report = json_report(&[]);

        assert_eq!(
            report["trophies"][0]["bounds"],
            json!({ "min": [10.0, 64.0, -3.0], "max": [11.0, 66.0, -2.0] })
        );
        assert!(report["trophies"][1].get("bounds").is_none());
    }

    #[test]
    fn test_malformed_passenger_dropped() {
        let report = json_report(&[]);
        let pig = &report["trophies"][1]["entity"];

        let riders = pig["passengers"].as_array().unwrap();
        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0]["type"], "minecraft:chicken");
        assert_eq!(riders[0]["passengers"][0]["type"], "minecraft:zombie");
    }

    #[test]
    fn test_item_trophy_defaults() {
        let report = json_report(&["--base-block", "gold_block"]);
        let sword = &report["trophies"][3];

        assert_eq!(sword["entity_status"], "none");
        assert_eq!(sword["item"], json!({ "id": "minecraft:diamond_sword", "count": 1 }));
        assert_eq!(sword["scale"], 1.0);
        assert_eq!(sword["offset_y"], 0.5);
        assert_eq!(sword["base_block"], "minecraft:gold_block");
    }

    #[test]
    fn test_peek_reported() {
        let report = json_report(&[]);
        assert_eq!(report["trophies"][4]["entity"]["peek"], 30);
    }

    #[test]
    fn test_defaults_hash_tracks_options() {
        let a = json_report(&[]);
        let b = json_report(&["--scale", "0.75"]);
        assert_ne!(a["summary"]["defaults_hash"], b["summary"]["defaults_hash"]);
    }
}

mod file_output {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_written_to_file() {
        let temp = TempDir::new().unwrap();
        let report_path = temp.path().join("report.txt");

        let output = Command::new(binary_path())
            .arg(fixtures_dir().join("trophies.json"))
            .arg(&report_path)
            .output()
            .expect("Failed to run binary");

        assert!(output.status.success());
        assert!(output.stdout.is_empty());

        let content = std::fs::read_to_string(&report_path).unwrap();
        assert!(content.contains("Summary:"));
        assert!(content.contains("Creatures resolved: 4"));
        assert!(content.contains("Constructions: 3"));
    }
}
