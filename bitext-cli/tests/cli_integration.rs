//! Integration tests for the bitext CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn bitext() -> Command {
    Command::cargo_bin("bitext").unwrap()
}

#[test]
fn test_align_tsv_to_stdout() {
    let expected = fs::read_to_string(fixture_path("greek-gothic.tsv")).unwrap();

    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_json_output() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-f")
        .arg("json")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"proiel-test-greek-gothic\""))
        .stdout(predicate::str::contains("\"merged\": 2"))
        .stdout(predicate::str::contains("\"extra_backward\": 1"));
}

#[test]
fn test_text_output() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-f")
        .arg("text")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "original [2,3] / translation [102,103]",
        ))
        .stdout(predicate::str::contains("4 groups: 1 one-to-one, 2 merged"));
}

#[test]
fn test_output_directory_with_groupings() {
    let dir = TempDir::new().unwrap();

    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-o")
        .arg(dir.path())
        .arg("--dump-groupings")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let matrix = fs::read_to_string(dir.path().join("proiel-test-greek-gothic.tsv")).unwrap();
    assert_eq!(
        matrix,
        fs::read_to_string(fixture_path("greek-gothic.tsv")).unwrap()
    );

    let forward =
        fs::read_to_string(dir.path().join("proiel-test-greek-gothic-forward.tsv")).unwrap();
    assert!(forward.contains("4\t104,105\n"));
    assert!(forward.contains("3\t102\n"));

    let backward =
        fs::read_to_string(dir.path().join("proiel-test-greek-gothic-backward.tsv")).unwrap();
    assert!(backward.contains("2\t103\n"));
    assert!(backward.contains("5\t\n"));
}

#[test]
fn test_pair_blacklist() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("blacklisted.json"))
        .arg("-q")
        .assert()
        .success()
        .stdout("original\ttranslation\n1\t10\n47183\t\n\t11\n3\t12\n");
}

#[test]
fn test_command_line_blacklist() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-b")
        .arg("4,104")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("4\t\n"))
        .stdout(predicate::str::contains("\t104\n"))
        .stdout(predicate::str::contains("\t105\n"));
}

#[test]
fn test_irreparable_pair_fails() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("broken.json"))
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "latin-armenian: irreparable alignment gap",
        ))
        .stderr(predicate::str::contains(
            "1 of 1 text pairs could not be aligned",
        ));
}

#[test]
fn test_batch_keeps_good_pairs() {
    let dir = TempDir::new().unwrap();

    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("*.json"))
        .arg("-o")
        .arg(dir.path())
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "1 of 3 text pairs could not be aligned",
        ));

    assert!(dir.path().join("proiel-test-greek-gothic.tsv").exists());
    assert!(dir.path().join("lacuna-greek-church-slavonic.tsv").exists());
    assert!(!dir.path().join("latin-armenian.tsv").exists());
}

#[test]
fn test_fail_fast() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("*.json"))
        .arg("--fail-fast")
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("alignment of latin-armenian failed"));
}

#[test]
fn test_parallel_flag() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-i")
        .arg(fixture_path("blacklisted.json"))
        .arg("--parallel")
        .arg("-t")
        .arg("2")
        .arg("-f")
        .arg("json")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_config_file_sets_format_and_blacklist() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bitext.toml");
    fs::write(
        &config,
        "[alignment]\nblacklist = [1]\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-c")
        .arg(&config)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unaligned_originals\":2"));
}

#[test]
fn test_no_matching_files() {
    bitext()
        .arg("align")
        .arg("-i")
        .arg("tests/fixtures/*.missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_check_valid_matrix() {
    bitext()
        .arg("check")
        .arg("-p")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-m")
        .arg(fixture_path("greek-gothic.tsv"))
        .arg("--recompute")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Matrix covers both texts in order!"))
        .stdout(predicate::str::contains("✓ Matrix matches a fresh alignment"));
}

#[test]
fn test_check_recomputes_with_config_blacklist() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bitext.toml");
    fs::write(&config, "[alignment]\nblacklist = [1]\n").unwrap();
    let out = dir.path().join("out");

    bitext()
        .arg("align")
        .arg("-i")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .env("BITEXT_CONFIG", &config)
        .assert()
        .success();

    let matrix = out.join("proiel-test-greek-gothic.tsv");
    assert!(fs::read_to_string(&matrix).unwrap().contains("\n1\t\n\t101\n"));

    bitext()
        .arg("check")
        .arg("-p")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-m")
        .arg(&matrix)
        .arg("--recompute")
        .env("BITEXT_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Matrix matches a fresh alignment"));

    bitext()
        .arg("check")
        .arg("-p")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-m")
        .arg(&matrix)
        .arg("--recompute")
        .env_remove("BITEXT_CONFIG")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Matrix differs from a fresh alignment"));
}

#[test]
fn test_check_incomplete_matrix() {
    let dir = TempDir::new().unwrap();
    let matrix = dir.path().join("short.tsv");
    fs::write(&matrix, "original\ttranslation\n1\t101\n2,3\t102,103\n").unwrap();

    bitext()
        .arg("check")
        .arg("-p")
        .arg(fixture_path("greek-gothic.json"))
        .arg("-m")
        .arg(&matrix)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Matrix is invalid!"))
        .stdout(predicate::str::contains("stored matrix"));
}

#[test]
fn test_list_formats() {
    bitext()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsv"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("txt"));
}

#[test]
fn test_list_errors() {
    bitext()
        .arg("list")
        .arg("errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("irreparable_alignment_gap"))
        .stdout(predicate::str::contains("invariant_violation"))
        .stdout(predicate::str::contains("invalid_input"));
}

#[test]
fn test_generate_config() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("bitext.toml");

    bitext()
        .arg("generate-config")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[performance]"));
}

#[test]
fn test_help_message() {
    bitext()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("align"))
        .stdout(predicate::str::contains("check"));
}
