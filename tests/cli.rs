use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("pubmap").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pubmap"));
}

#[test]
fn default_run_writes_into_files_dir() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pubmap").unwrap();
    cmd.current_dir(dir.path());
    let run = cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV file created: files/countries.csv"))
        .stdout(predicate::str::contains("Map file created: files/map.html"));

    let stdout = String::from_utf8(run.get_output().stdout.clone()).unwrap();
    let csv_line = stdout.find("CSV file created").unwrap();
    let map_line = stdout.find("Map file created").unwrap();
    assert!(csv_line < map_line, "CSV line should come first: {stdout}");

    let csv = fs::read_to_string(dir.path().join("files/countries.csv")).unwrap();
    assert!(csv.starts_with("countries,count\n"));
    assert!(dir.path().join("files/map.html").exists());

    // second run into an existing directory
    Command::cargo_bin("pubmap")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn custom_dataset_and_stats() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.json");
    fs::write(
        &data,
        r#"{"countries":["Iceland","Atlantis"],"counts":[1,5],"coordinates":{"Iceland":[64.9631,-19.0208]}}"#,
    )
    .unwrap();
    let out_dir = dir.path().join("out");

    let mut cmd = Command::cargo_bin("pubmap").unwrap();
    cmd.arg("--out-dir")
        .arg(&out_dir)
        .arg("--data")
        .arg(&data)
        .arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("countries=2 mapped=1"))
        .stdout(predicate::str::contains("unmapped: Atlantis"));

    let csv = fs::read_to_string(out_dir.join("countries.csv")).unwrap();
    assert_eq!(csv, "countries,count\nIceland,1\nAtlantis,5\n");
    let html = fs::read_to_string(out_dir.join("map.html")).unwrap();
    assert_eq!(html.matches("L.circleMarker(").count(), 1);
}

#[test]
fn mismatched_dataset_fails() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("bad.json");
    fs::write(
        &data,
        r#"{"countries":["Iceland","Atlantis"],"counts":[1],"coordinates":{}}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("pubmap").unwrap();
    cmd.current_dir(dir.path()).arg("--data").arg(&data);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("count list has 1"));
    assert!(!dir.path().join("files").exists());
}

#[test]
fn info_logging_names_output_paths() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pubmap").unwrap();
    cmd.current_dir(dir.path()).env("RUST_LOG", "info");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("writing files/countries.csv"))
        .stderr(predicate::str::contains("writing files/map.html"));
}
