//! Integration tests for the langsift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn langsift() -> Command {
    let mut cmd = Command::cargo_bin("langsift").unwrap();
    cmd.env_remove("LANGSIFT_CONFIG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn identify(input: &Path, format: &str, workflow: &str) -> Command {
    let mut cmd = langsift();
    cmd.arg("identify")
        .arg("-i")
        .arg(input)
        .arg("-f")
        .arg(format)
        .arg("-w")
        .arg(workflow)
        .arg("--quiet");
    cmd
}

#[test]
fn test_stdout_line_by_line_english() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "This text is written in English.");

    let output = identify(&input, "stdout", "line-by-line")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let columns: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[0], input.display().to_string());
    assert_eq!(columns[1], "en");
    assert_eq!(columns[2].split('.').nth(1).map(str::len), Some(9));
    assert_eq!(columns[3], "1.000000000");
    assert_eq!(columns[4], "This text is written in English.");
}

#[test]
fn test_stdout_format_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "This text is written in English.");

    identify(&input, "StDoUt", "WHOLE-TEXT")
        .assert()
        .success()
        .stdout(predicate::str::contains("\ten\t"));
}

#[test]
fn test_top_n_multiplies_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        &temp_dir,
        "hello.txt",
        "This text is written in English.\nThe weather is lovely and the garden is full of flowers.\n",
    );

    let output = identify(&input, "stdout", "line-by-line")
        .arg("-n")
        .arg("2")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let count = stdout.lines().count();
    assert!(count >= 2 && count <= 4, "unexpected record count {count}");
    assert!(stdout.lines().next().unwrap().contains("\ten\t"));
}

#[test]
fn test_json_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        &temp_dir,
        "hello.txt",
        "This text is written in English.\n\nCan you read it?\n",
    );
    let output_file = temp_dir.path().join("results.json");

    identify(&input, "json", "line-by-line")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: Value = serde_json::from_str(&fs::read_to_string(&output_file).unwrap()).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["language"], "en");
    assert_eq!(records[0]["line_number"], 1);
    assert_eq!(records[1]["line_number"], 3);
    assert_eq!(records[0]["text"], "This text is written in English.");
    assert_eq!(records[0]["reliable"], true);
    assert_eq!(records[0]["proportion"], 1.0);
    assert!(records[0]["source"].as_str().unwrap().ends_with("hello.txt"));
}

#[test]
fn test_json_whole_text_has_no_line_number() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        &temp_dir,
        "hello.txt",
        "This text is written in English.\nCan you read it?\n",
    );
    let output_file = temp_dir.path().join("results.json");

    identify(&input, "json", "whole-text")
        .arg("--output")
        .arg(&output_file)
        .assert()
        .success();

    let value: Value = serde_json::from_str(&fs::read_to_string(&output_file).unwrap()).unwrap();
    let record = value[0].as_object().unwrap();
    assert!(!record.contains_key("line_number"));
    assert_eq!(
        record["text"],
        "This text is written in English.\\nCan you read it?\\n"
    );
}

#[test]
fn test_json_without_destination_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "This text is written in English.");

    identify(&input, "json", "line-by-line")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No JSON output file"));
}

#[test]
fn test_json_destination_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "This text is written in English.");
    let output_file = temp_dir.path().join("from-config.json");
    let config = write_file(
        &temp_dir,
        "langsift.toml",
        &format!(
            "[output]\npretty_json = false\njson_path = {:?}\n",
            output_file.display().to_string()
        ),
    );

    identify(&input, "json", "line-by-line")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("[{"));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "This text is written in English.");
    let config = write_file(&temp_dir, "broken.toml", "[model]\nmax_bytes = 0\n");

    identify(&input, "stdout", "line-by-line")
        .env("LANGSIFT_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_bytes"));
}

#[test]
fn test_stdout_with_output_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "This text is written in English.");

    identify(&input, "stdout", "line-by-line")
        .arg("-o")
        .arg(temp_dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --format json"));
}

#[test]
fn test_chinese_directory_whole_text() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir, "hello1.txt", "这是中文的。");
    write_file(&temp_dir, "hello2.txt", "看得懂吗？");

    let output = identify(temp_dir.path(), "stdout", "whole-text")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("hello1.txt\tzh\t"));
    assert!(lines[0].ends_with("\t这是中文的。"));
    assert!(lines[1].contains("hello2.txt\tzh\t"));
    assert!(lines[1].ends_with("\t看得懂吗？"));
}

#[test]
fn test_recursive_flag_visits_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir, "top.txt", "This text is written in English.");
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    fs::write(
        temp_dir.path().join("nested").join("deep.txt"),
        "This text is also written in English.",
    )
    .unwrap();

    let flat = identify(temp_dir.path(), "stdout", "whole-text")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(flat.stdout).unwrap().lines().count(), 1);

    let deep = identify(temp_dir.path(), "stdout", "whole-text")
        .arg("--recursive")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(deep.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_empty_file_produces_no_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "empty.txt", "");

    for workflow in ["line-by-line", "whole-text"] {
        identify(&input, "stdout", workflow)
            .arg("-n")
            .arg("3")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn test_unreadable_file_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir, "a.txt", "This text is written in English.");
    fs::write(temp_dir.path().join("b.txt"), [0xff, 0xfe, 0xfd]).unwrap();

    identify(temp_dir.path(), "stdout", "line-by-line")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Identification failed"));
}

#[test]
fn test_invalid_file() {
    identify(Path::new("nonexistent.txt"), "stdout", "line-by-line")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot use input path"));
}

#[test]
fn test_invalid_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "Hello.");

    identify(&input, "xml", "line-by-line")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("output format should be either"));
}

#[test]
fn test_invalid_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "Hello.");

    identify(&input, "stdout", "line-by-file")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("workflow should be either"));
}

#[test]
fn test_zero_top_n_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(&temp_dir, "hello.txt", "Hello.");

    identify(&input, "stdout", "line-by-line")
        .arg("-n")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("N should be a positive number"));
}

#[test]
fn test_missing_required_arguments() {
    langsift()
        .arg("identify")
        .arg("-i")
        .arg("somewhere")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_command() {
    langsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("language identification"));
}

#[test]
fn test_list_formats_and_workflows() {
    langsift()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::diff("json\nstdout\n"));

    langsift()
        .args(["list", "workflows"])
        .assert()
        .success()
        .stdout(predicate::str::diff("line-by-line\nwhole-text\n"));
}

#[test]
fn test_list_languages() {
    langsift()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en\n"))
        .stdout(predicate::str::contains("zh\n"));
}
