//! CLI integration tests for trophy-cache

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to the built binary
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_trophy-cache"))
}

mod cli_behavior {
    use super::*;

    #[test]
    fn test_help_flag() {
        let output = Command::new(binary_path())
            .arg("--help")
            .output()
            .expect("Failed to run binary");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("resolve their creatures"));
        assert!(stdout.contains("--json"));
        assert!(stdout.contains("--equip"));
    }

    #[test]
    fn test_version_flag() {
        let output = Command::new(binary_path())
            .arg("--version")
            .output()
            .expect("Failed to run binary");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("trophy-cache"));
    }

    #[test]
    fn test_missing_input_file() {
        let output = Command::new(binary_path())
            .arg("/nonexistent/trophies.json")
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Cannot open trophy file"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let output = Command::new(binary_path())
            .args(["-j", "0"])
            .arg(fixtures_dir().join("trophies.json"))
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_malformed_input() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        {
            use std::io::Write;
            write!(file, "{{\"not\": \"an array\"}}").unwrap();
        }

        let output = Command::new(binary_path())
            .arg(file.path())
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("JSON array"));
    }

    #[test]
    fn test_stdin_input() {
        use std::io::Write;
        use std::process::Stdio;

        let mut child = Command::new(binary_path())
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn binary");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(br#"[{"TrophyType": "entity", "TrophyEntity": {"entityType": "minecraft:cow"}}]"#)
            .unwrap();

        let output = child.wait_with_output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("entity: minecraft:cow [mob]"));
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_all_resolved_exits_zero() {
        let output = Command::new(binary_path())
            .arg(fixtures_dir().join("trophies.json"))
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(0));
    }

    #[test]
    fn test_unknown_creature_exits_one() {
        let output = Command::new(binary_path())
            .arg(fixtures_dir().join("unknown.json"))
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("entity: not found"));

        // the failure is reported through the logger, not fatal
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unable to load trophy entity"));
    }

    #[test]
    fn test_registry_extension_resolves_unknown() {
        let output = Command::new(binary_path())
            .arg("--registry")
            .arg(fixtures_dir().join("registry.json"))
            .arg(fixtures_dir().join("unknown.json"))
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("entity: mymod:golem [angerable_mob] anger=12"));
    }
}
