use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn arcpick(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("arcpick").unwrap();
    cmd.current_dir(dir)
        .env_remove("ARCPICK_UNZIP")
        .env_remove("ARCPICK_TAR")
        .env_remove("ARCPICK_UNRAR")
        .env_remove("RUST_LOG")
        .arg("--output-format")
        .arg("plain");
    cmd
}

fn touch(dir: &Path, name: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[test]
fn test_nothing_found() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "notes.txt");

    arcpick(temp_dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No compressed files found."));
}

#[test]
fn test_exit_without_extracting() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");

    arcpick(temp_dir.path())
        .write_stdin("n\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 compressed files:"))
        .stdout(predicate::str::contains("1. a.zip"))
        .stdout(predicate::str::contains("Exiting without extracting files."));
}

#[test]
fn test_extracts_with_configured_tool() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");

    arcpick(temp_dir.path())
        .env("ARCPICK_UNZIP", "true")
        .write_stdin("n\n1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted: a.zip"))
        .stdout(predicate::str::contains("Done."));
}

#[test]
fn test_tool_failure_is_reported_and_batch_finishes() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");
    touch(temp_dir.path(), "b.rar");

    arcpick(temp_dir.path())
        .arg("--no-recursive")
        .env("ARCPICK_UNZIP", "false")
        .env("ARCPICK_UNRAR", "true")
        .write_stdin("1,2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error extracting a.zip"))
        .stdout(predicate::str::contains("Extracted: b.rar"))
        .stdout(predicate::str::contains("1 extracted, 1 failed, 0 skipped"))
        .stdout(predicate::str::contains("Done."));
}

#[test]
fn test_missing_tool_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");

    arcpick(temp_dir.path())
        .args(["--no-recursive", "--unzip", "arcpick-no-such-tool-xyz"])
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error extracting a.zip: Failed to launch"));
}

#[test]
fn test_recursive_flag_skips_mode_question() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");
    touch(temp_dir.path(), "one/two/deep.tar.gz");

    arcpick(temp_dir.path())
        .arg("-r")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Include subfolders?").not())
        .stdout(predicate::str::contains("Found 2 compressed files:"))
        .stdout(predicate::str::contains("\n1. a.zip\n"))
        .stdout(predicate::str::contains("\n2. one/two/deep.tar.gz\n"));
}

/// Writes an executable that prints its arguments, one `ARG=` line each.
#[cfg(unix)]
fn echo_tool(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("echo-args");
    fs::write(&script, "#!/bin/sh\nfor a in \"$@\"; do echo \"ARG=$a\"; done\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[cfg(unix)]
#[test]
fn test_tool_receives_scanned_paths() {
    let tools = TempDir::new().unwrap();
    let script = echo_tool(tools.path());

    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");
    touch(temp_dir.path(), "one/two/deep.tar.gz");

    arcpick(temp_dir.path())
        .arg("-r")
        .env("ARCPICK_TAR", &script)
        .write_stdin("2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ARG=one/two/deep.tar.gz\n"))
        .stdout(predicate::str::contains("ARG=one/two\n"))
        .stdout(predicate::str::contains("Extracted: one/two/deep.tar.gz"));
}

#[cfg(unix)]
#[test]
fn test_dash_named_archive_is_not_an_option() {
    let tools = TempDir::new().unwrap();
    let script = echo_tool(tools.path());

    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "-l.zip");

    arcpick(temp_dir.path())
        .arg("--no-recursive")
        .env("ARCPICK_UNZIP", &script)
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. -l.zip"))
        .stdout(predicate::str::contains("ARG=./-l.zip\n"))
        .stdout(predicate::str::contains("ARG=-l.zip\n").not());
}

#[test]
fn test_non_utf8_answer_is_rejected_and_reprompted() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");

    arcpick(temp_dir.path())
        .arg("--no-recursive")
        .write_stdin(&b"\xff\xfe\nx\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid index: \u{FFFD}\u{FFFD}"))
        .stdout(predicate::str::contains("Invalid indices, please try again."))
        .stdout(predicate::str::contains("Exiting without extracting files."));
}

#[test]
fn test_invalid_selection_reprompts() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");

    arcpick(temp_dir.path())
        .arg("--no-recursive")
        .write_stdin("7\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid index: 7"))
        .stdout(predicate::str::contains("Invalid indices, please try again."))
        .stdout(predicate::str::contains("Exiting without extracting files."));
}

#[test]
fn test_closed_input_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.zip");

    arcpick(temp_dir.path()).write_stdin("").assert().success();
}

#[test]
fn test_invalid_directory_fails_startup() {
    let temp_dir = TempDir::new().unwrap();

    arcpick(temp_dir.path())
        .args(["--dir", "missing-folder"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid directory: missing-folder"));
}

#[test]
fn test_real_tar_extraction() {
    let has_tar = std::process::Command::new("tar")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !has_tar {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let staging = temp_dir.path().join("staging");
    fs::create_dir(&staging).unwrap();
    fs::write(staging.join("hello.txt"), "hi").unwrap();

    let status = std::process::Command::new("tar")
        .arg("czf")
        .arg(temp_dir.path().join("pack.tar.gz"))
        .arg("-C")
        .arg(&staging)
        .arg("hello.txt")
        .status()
        .unwrap();
    assert!(status.success());

    arcpick(temp_dir.path())
        .arg("--no-recursive")
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted: pack.tar.gz"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("hello.txt")).unwrap(),
        "hi"
    );
}
