//! Integration tests for gn-address-audit
//!
//! These tests run the complete batch workflow from router dumps and a
//! register export to the written report files.

use gn_address_audit::{
    output::SECTION_DIVIDER,
    process_text,
    processing::{load_inventory, reconcile},
    run_batch,
    source::{load_register_file, FileOutcome},
    Config,
};
use std::fs;
use std::path::{Path, PathBuf};

const TEST_DATA: &str = "src/tests/test_data";

/// Copy the fixture dumps and register into a fresh scratch directory.
fn scratch_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in ["fw_01.txt", "fw_no_stanza.txt", "register_01.csv"] {
        fs::copy(Path::new(TEST_DATA).join(name), dir.path().join(name))
            .expect("Failed to copy fixture");
    }
    dir
}

fn config_for(dir: &Path) -> Config {
    Config {
        data_directory: dir.to_path_buf(),
        register_path: Some(dir.join("register_01.csv")),
        ..Config::default()
    }
}

#[test]
fn test_full_workflow_with_register() {
    let dir = scratch_dir();
    let summary = run_batch(&config_for(dir.path())).expect("Batch run failed");

    assert_eq!(summary.processed_count(), 1, "Expected 1 processed file");
    assert_eq!(summary.skipped_count(), 1, "fw_no_stanza.txt should be skipped");
    assert_eq!(summary.reports_with_diff(), 1);

    let cidr = fs::read_to_string(dir.path().join("fw_01_Extract_CIDR.txt"))
        .expect("CIDR output missing");
    assert!(cidr.contains(" address 3 172.16.0.0/29 description CT\n"));
    assert!(cidr.contains(" address 0 8.8.8.8/32 description GOOG\n"));
    assert!(cidr.contains(" address 3 7.7.7.0 wildcard 0.0.0.x description CU\n"));
    assert!(!cidr.contains("sysname"));
    assert!(!cidr.contains("interface GigabitEthernet"));

    let report = fs::read_to_string(dir.path().join("fw_01_Extract_CIDR_比较结果.txt"))
        .expect("Report missing");
    let expected = format!(
        "【Excel存在的运营商】\nCT\n172.16.0.0/29\n\n{d}\n{d}\n\n【Excel中不存在的运营商】\nCU\n9.9.9.0/30\n\nGOOG\n8.8.8.8/32\n\n",
        d = SECTION_DIVIDER
    );
    assert_eq!(report, expected);

    assert!(
        !dir.path().join("fw_01_Extract.txt").exists(),
        "Extract file is only kept with keepExtract"
    );
    assert!(!dir.path().join("fw_no_stanza_Extract_CIDR.txt").exists());
}

#[test]
fn test_rerun_ignores_generated_files() {
    let dir = scratch_dir();
    let config = Config {
        keep_extract: true,
        ..config_for(dir.path())
    };
    run_batch(&config).expect("First run failed");
    assert!(dir.path().join("fw_01_Extract.txt").exists());

    let summary = run_batch(&config).expect("Second run failed");
    assert_eq!(summary.outcomes.len(), 2, "Generated files must not be re-read");
    assert!(!dir.path().join("fw_01_Extract_CIDR_Extract_CIDR.txt").exists());
}

#[test]
fn test_extract_only_without_register() {
    let dir = scratch_dir();
    let config = Config {
        register_path: None,
        ..config_for(dir.path())
    };
    let summary = run_batch(&config).expect("Batch run failed");

    let processed: Vec<&PathBuf> = summary
        .outcomes
        .iter()
        .filter_map(|o| match o {
            FileOutcome::Processed {
                cidr_path,
                report_path,
                stanza_count,
                ..
            } => {
                assert!(report_path.is_none());
                assert_eq!(*stanza_count, 2);
                Some(cidr_path)
            }
            FileOutcome::Skipped { .. } => None,
        })
        .collect();
    assert_eq!(processed.len(), 1);
    assert!(processed[0].exists());
    assert!(!dir.path().join("fw_01_Extract_CIDR_比较结果.txt").exists());
}

#[test]
fn test_unsupported_register_fails_before_processing() {
    let dir = scratch_dir();
    let config = Config {
        register_path: Some(dir.path().join("register.ods")),
        ..config_for(dir.path())
    };
    let err = run_batch(&config).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported register format: .ods");
    assert!(
        !dir.path().join("fw_01_Extract_CIDR.txt").exists(),
        "Nothing should be written on register error"
    );
}

#[test]
fn test_missing_data_directory_is_fatal() {
    let config = Config {
        data_directory: PathBuf::from("no/such/dir"),
        register_path: None,
        ..Config::default()
    };
    assert!(run_batch(&config).is_err());
}

#[test]
fn test_pipeline_without_files() {
    let text = fs::read_to_string(Path::new(TEST_DATA).join("fw_01.txt")).unwrap();
    let extracted =
        process_text(&text, &Config::default().stanza_open_token).expect("Stanzas expected");
    assert_eq!(extracted.stanzas.len(), 2);
    assert!(extracted.stanzas.iter().all(|s| s.terminated));

    let inventory = load_inventory(extracted.cidr_text.lines());
    assert_eq!(inventory.carriers(), vec!["CM", "CT", "CU", "GOOG"]);

    let register = load_register_file(&Path::new(TEST_DATA).join("register_01.csv"), "")
        .expect("Register load failed");
    let report = reconcile(&register, &inventory);
    assert_eq!(report.mismatched["CT"], vec!["172.16.0.0/29"]);
    assert!(!report.mismatched.contains_key("CM"), "CM matches the register");
    assert_eq!(report.unknown_carrier.len(), 2);
}
