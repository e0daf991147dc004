//! CLI end-to-end tests
//!
//! Tests for the davshelf command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the davshelf binary, isolated from the caller's
/// environment and working directory.
#[allow(deprecated)]
fn davshelf_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("davshelf").unwrap();
    cmd.current_dir(dir)
        .env_remove("RD_WEBDAV_URL")
        .env_remove("RD_WEBDAV_USERNAME")
        .env_remove("RD_WEBDAV_PASSWORD")
        .env_remove("TMDB_API_KEY")
        .env_remove("DAVSHELF_HOST")
        .env_remove("DAVSHELF_PORT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("davshelf "));
}

#[test]
fn test_cli_guess_title() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .args([
            "guess-title",
            "Breaking.Bad.S01E01.720p.2008.mkv",
            "The_Matrix_1999_2160p.mp4",
        ])
        .assert()
        .success()
        .stdout("Breaking Bad\nThe Matrix\n");
}

#[test]
fn test_cli_guess_title_requires_argument() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .arg("guess-title")
        .assert()
        .failure();
}

#[test]
fn test_cli_list_from_fixture() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("fixture.json"),
        r#"[{"name": "Inception.2010.1080p.BluRay.mkv", "path": "/movies/Inception.2010.1080p.BluRay.mkv"}]"#,
    )
    .unwrap();
    let config_path = dir.path().join("davshelf.toml");
    fs::write(&config_path, "[webdav]\nfixture_path = \"fixture.json\"\n").unwrap();

    davshelf_cmd(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "list", "--player", "mpv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception BluRay"))
        .stdout(predicate::str::contains("File: Inception.2010.1080p.BluRay.mkv"))
        .stdout(predicate::str::contains("Play (mpv): mpv:///movies/Inception.2010.1080p.BluRay.mkv"));
}

#[test]
fn test_cli_list_json_empty() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_cli_validate_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[server\nport = ").unwrap();

    davshelf_cmd(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "validate"])
        .assert()
        .failure();
}

#[test]
fn test_cli_validate_reports_partial_webdav() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .env("RD_WEBDAV_URL", "https://dav.example.com")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("must all be set"));
}

#[test]
fn test_cli_dotenv_sets_log_filter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "RUST_LOG=davshelf=debug\n").unwrap();

    davshelf_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Building catalog"));
}

#[test]
fn test_cli_default_log_filter_hides_debug() {
    let dir = tempdir().unwrap();
    davshelf_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Building catalog").not());
}
