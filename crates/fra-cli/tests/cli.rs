use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PATTA: &str = "Forest Rights Patta\n\
Patta Holder\n\
Sita Bai\n\
Village\n\
Kasa\n\
District\n\
Gondia\n\
Total Area 2.5 hectare\n\
Survey No 87/2B\n\
Date 12/08/2022\n";

fn fra() -> Command {
    Command::cargo_bin("fra").unwrap()
}

/// A temp dir with an empty config file, so nothing is read from the user's home.
fn workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();
    (dir, config)
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_extract_json_from_file() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "patta.txt", PATTA);

    fra()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""pattalHolderName": "Sita Bai""#))
        .stdout(predicate::str::contains(r#""village": "Kasa""#))
        .stdout(predicate::str::contains(r#""totalArea": "2.5""#))
        .stdout(predicate::str::contains(r#""surveyNumber": "87/2B""#))
        .stdout(predicate::str::contains(r#""status": "pending""#));
}

#[test]
fn test_extract_from_stdin_as_csv() {
    let (_dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .args(["extract", "-", "--format", "csv"])
        .write_stdin(PATTA)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("document_type,issue_date,district"))
        .stdout(predicate::str::contains("Sita Bai"));
}

#[test]
fn test_extract_envelope_reports_insufficient_evidence() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "scan.txt", "Tribe\nGond\n");

    fra()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(&input)
        .arg("--envelope")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": false"#))
        .stdout(predicate::str::contains(r#""rawText": "Tribe\nGond\n""#))
        .stdout(predicate::str::contains("extractedData").not());
}

#[test]
fn test_extract_document_type_override() {
    let (_dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .args(["extract", "-", "--document-type", "Community Forest Rights"])
        .write_stdin("Village\nKasa\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""documentType": "Community Forest Rights""#,
        ));
}

#[test]
fn test_extract_explain_lists_rule_hits() {
    let (_dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .args(["extract", "-", "--explain"])
        .write_stdin("District\nGondia\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("district"))
        .stderr(predicate::str::contains("<- District"));
}

#[test]
fn test_extract_missing_input_fails() {
    let (dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let (dir, config) = workspace();
    let scans = dir.path().join("scans");
    fs::create_dir_all(&scans).unwrap();
    write(&scans, "a.txt", PATTA);
    write(&scans, "b.txt", "illegible\n");
    write(&scans, "ignored.pdf", "not text");
    let out = dir.path().join("out");

    fra()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(format!("{}/*", scans.display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files"));

    let claim = fs::read_to_string(out.join("a.json")).unwrap();
    assert!(claim.contains("Sita Bai"));
    assert!(!out.join("b.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("filename,status,document_type"));
    assert!(lines[1].starts_with("a.txt,success,"));
    assert!(lines[2].starts_with("b.txt,insufficient,"));
}

#[test]
fn test_batch_same_stem_in_two_directories() {
    let (dir, config) = workspace();
    let scans = dir.path().join("scans");
    fs::create_dir_all(scans.join("a")).unwrap();
    fs::create_dir_all(scans.join("b")).unwrap();
    write(&scans.join("a"), "x.txt", PATTA);
    write(&scans.join("b"), "x.txt", "District\nGadchiroli\n");
    let out = dir.path().join("out");

    fra()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(format!("{}/**/*.txt", scans.display()))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let first = fs::read_to_string(out.join("x.json")).unwrap();
    let second = fs::read_to_string(out.join("x-2.json")).unwrap();
    assert!(first.contains("Sita Bai"));
    assert!(second.contains("Gadchiroli"));
}

#[test]
fn test_batch_output_never_replaces_summary() {
    let (dir, config) = workspace();
    let scans = dir.path().join("scans");
    fs::create_dir_all(&scans).unwrap();
    write(&scans, "summary.txt", PATTA);
    let out = dir.path().join("out");

    fra()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(format!("{}/*.txt", scans.display()))
        .arg("--output-dir")
        .arg(&out)
        .args(["--format", "csv", "--summary"])
        .assert()
        .success();

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,"));
    assert!(summary.contains("summary.txt,success,"));

    let claim = fs::read_to_string(out.join("summary-2.csv")).unwrap();
    assert!(claim.starts_with("document_type,"));
    assert!(claim.contains("Sita Bai"));
}

#[test]
fn test_batch_without_matches_fails() {
    let (dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_records_list_seeds_demo_data_without_writing() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["claims", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ramesh Kumar Bhuriya"))
        .stdout(predicate::str::contains("Priya Tekam"));

    assert!(!data.exists());
}

#[test]
fn test_records_filter_by_status() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["claims", "list", "--status", "granted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ramesh Kumar Bhuriya"))
        .stdout(predicate::str::contains("Priya Tekam").not());
}

#[test]
fn test_records_import_then_list() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");
    let input = write(dir.path(), "patta.txt", PATTA);

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["claims", "import"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported claim"));

    assert!(data.exists());

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["claims", "list", "--village", "Kasa", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sita Bai"))
        .stdout(predicate::str::contains(r#""issueDate": "2022-08-12""#));
}

#[test]
fn test_records_import_rejects_text_without_identity() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["claims", "import", "-"])
        .write_stdin("Tribe\nGond\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("enter the claim manually"));

    assert!(!data.exists());
}

#[test]
fn test_records_add_village_from_json() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");
    let file = write(
        dir.path(),
        "villages.json",
        r#"[{"name": "Korchi", "district": "Gadchiroli", "population": 800, "tribalPopulation": 600}]"#,
    );

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["villages", "add"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 villages"));

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["villages", "list", "--district", "Gadchiroli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Korchi"))
        .stdout(predicate::str::contains("75% tribal"));
}

#[test]
fn test_records_add_rejects_invalid_record() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");
    let file = write(
        dir.path(),
        "village.json",
        r#"{"name": "Korchi", "district": "Gadchiroli", "population": 10, "tribalPopulation": 20}"#,
    );

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args(["villages", "add"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 1"));

    assert!(!data.exists());
}

#[test]
fn test_records_set_status_unknown_claim() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args([
            "claims",
            "set-status",
            "00000000-0000-0000-0000-000000000000",
            "granted",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("claim not found"));
}

#[test]
fn test_records_set_status_rejects_unknown_status() {
    let (dir, config) = workspace();
    let data = dir.path().join("records.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["records", "--data-file"])
        .arg(&data)
        .args([
            "claims",
            "set-status",
            "00000000-0000-0000-0000-000000000000",
            "approved",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status"));
}

#[test]
fn test_stats_json_over_demo_data() {
    let (dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .args(["stats", "--json", "--data-file"])
        .arg(dir.path().join("records.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""totalClaims": 2"#))
        .stdout(predicate::str::contains(r#""grantedArea": "2.50""#));
}

#[test]
fn test_stats_with_empty_store() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.json", r#"{"store": {"seed_demo_data": false}}"#);

    fra()
        .arg("--config")
        .arg(&config)
        .args(["stats", "--json", "--data-file"])
        .arg(dir.path().join("records.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""totalClaims": 0"#));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fra").join("config.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.raw_text_preview_chars", "120"])
        .assert()
        .success();

    fra()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.raw_text_preview_chars"])
        .assert()
        .success()
        .stdout(predicate::str::diff("120\n"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    fra()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.language", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let (_dir, config) = workspace();

    fra()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fra()
        .arg("--config")
        .arg(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("Forest Rights Patta"));
}
