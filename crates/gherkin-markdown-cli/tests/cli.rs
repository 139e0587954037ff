//! Smoke tests for the `g2md` binary.

use std::fs;
use std::str;

use assert_cmd::Command;
use tempfile::TempDir;

const FEATURE: &str = concat!(
    "Feature: Foo\n",
    "  @wip\n",
    "  Scenario: Hidden\n",
    "    Given unfinished work\n",
    "  Scenario: Bar\n",
    "    Given something\n",
);

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
fn g2md() -> Command {
    let mut cmd = Command::cargo_bin("g2md").expect("binary exists");
    cmd.env_remove("G2MD_LOG_LEVEL");
    cmd
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn converts_a_single_file_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("foo.feature");
    fs::write(&path, FEATURE).expect("write feature");

    let output = g2md().arg(&path).output().expect("runs");
    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).expect("utf8");
    assert!(stdout.starts_with("# Foo\n"));
    assert!(stdout.contains("## Hidden\n"));
    assert!(stdout.contains("_Given_ something.\n"));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn ignored_tags_are_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("foo.feature");
    fs::write(&path, FEATURE).expect("write feature");

    let output = g2md()
        .arg(&path)
        .arg("--ignoretags=@wip,@slow")
        .output()
        .expect("runs");
    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).expect("utf8");
    assert_eq!(stdout, "# Foo\n\n## Bar\n\n_Given_ something.\n");
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn converts_a_directory() {
    let src = TempDir::new().expect("source dir");
    let dest = TempDir::new().expect("destination dir");
    fs::create_dir_all(src.path().join("nested")).expect("create nested");
    fs::write(src.path().join("nested/foo.feature"), FEATURE).expect("write feature");

    let output = g2md()
        .arg(src.path())
        .arg(dest.path())
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let markdown = fs::read_to_string(dest.path().join("nested/foo.md")).expect("read output");
    assert!(markdown.starts_with("# Foo\n"));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn parse_failures_exit_non_zero_with_message() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.feature");
    fs::write(&path, "Feature").expect("write feature");

    let output = g2md().arg(&path).output().expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("failed to convert"));
    assert!(stderr.contains("broken.feature"));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn missing_source_directory_fails() {
    let dest = TempDir::new().expect("destination dir");
    let output = g2md()
        .arg("definitely-missing-dir")
        .arg(dest.path())
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn invalid_log_level_in_environment_exits_with_two() {
    let output = g2md()
        .env("G2MD_LOG_LEVEL", "chatty")
        .arg("whatever.feature")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("unknown log level"));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn log_level_flag_overrides_a_bad_environment_value() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("foo.feature");
    fs::write(&path, FEATURE).expect("write feature");

    let output = g2md()
        .env("G2MD_LOG_LEVEL", "chatty")
        .arg("--log-level=off")
        .arg(&path)
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
