use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wildsweep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wildsweep"))
}

fn tree(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for rel in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, rel).unwrap();
    }
    dir
}

fn exists(dir: &TempDir, rel: &str) -> bool {
    dir.path().join(rel).exists()
}

#[test]
fn deletes_by_extension() {
    let dir = tree(&["a.js", "b.ts", "subdir/c.js"]);

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.js"))
        .stdout(predicate::str::contains(
            "2 file(s) deleted, 0 failure(s), 2 directories scanned",
        ));

    assert!(!exists(&dir, "a.js"));
    assert!(!exists(&dir, "subdir/c.js"));
    assert!(exists(&dir, "b.ts"));
    assert!(dir.path().join("subdir").is_dir());
}

#[test]
fn deletes_by_word_anywhere_in_the_path() {
    let dir = tree(&["notes-example.txt", "example/readme.md", "readme.txt"]);

    wildsweep().arg(dir.path()).args(["-i", "[**example**]"]).assert().success();

    assert!(!exists(&dir, "notes-example.txt"));
    assert!(!exists(&dir, "example/readme.md"));
    assert!(exists(&dir, "readme.txt"));
}

#[test]
fn duplicate_tokens_fail_without_deleting() {
    let dir = tree(&["a.js"]);

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]", "-i", "[.js]"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate pattern"));

    assert!(exists(&dir, "a.js"));
}

#[test]
fn malformed_token_is_rejected() {
    let dir = tree(&["a.js"]);

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]", "-i", "[**oops]"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid wildcard."));

    assert!(exists(&dir, "a.js"));
}

#[test]
fn missing_starting_path_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    wildsweep().arg(dir.path().join("absent")).args(["-i", "[.js]"]).assert().code(1);
}

#[test]
fn no_matches_is_success() {
    let dir = tree(&["a.txt"]);

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) deleted"));

    assert!(exists(&dir, "a.txt"));
}

#[test]
fn exclusions_and_stop_at_protect_files() {
    let dir = tree(&["a.tmp", "keep.tmp", "vault/b.tmp"]);

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.tmp]", "-x", "[**keep**]", "--stop-at"])
        .arg(dir.path().join("vault"))
        .assert()
        .success();

    assert!(!exists(&dir, "a.tmp"));
    assert!(exists(&dir, "keep.tmp"));
    assert!(exists(&dir, "vault/b.tmp"));
}

#[test]
fn json_report_is_machine_readable() {
    let dir = tree(&["a.js", "b.css"]);

    let output = wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]", "-i", "[.css]", "--single-pass", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files_deleted"], 2);
    assert_eq!(report["strategy"], "single-pass");
    assert_eq!(report["patterns"], serde_json::json!(["[.js]", "[.css]"]));
}

#[test]
fn request_file_drives_the_run() {
    let dir = tree(&["work/a.log", "work/keep.log", "work/b.txt"]);
    let request = dir.path().join("run.yaml");
    fs::write(
        &request,
        format!(
            "startingPath: '{}'\nfileTypes:\n  includedFileNames: ['[.log]']\n  excludedFileNames: ['[**keep**]']\n",
            dir.path().join("work").display()
        ),
    )
    .unwrap();

    wildsweep().arg("--request").arg(&request).assert().success();

    assert!(!exists(&dir, "work/a.log"));
    assert!(exists(&dir, "work/keep.log"));
    assert!(exists(&dir, "work/b.txt"));
}

#[test]
fn unsupported_request_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("run.toml");
    fs::write(&request, "").unwrap();

    wildsweep()
        .arg("--request")
        .arg(&request)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported request file"));
}

#[test]
fn verbose_logs_each_deletion_to_stderr() {
    let dir = tree(&["a.js"]);

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[info] deleted"));

    assert!(!Path::new(&dir.path().join("a.js")).exists());
}

#[cfg(unix)]
#[test]
fn deletion_failures_exit_zero_unless_strict() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tree(&["locked/a.js", "b.txt"]);
    let locked = dir.path().join("locked");
    let set_mode = |mode| fs::set_permissions(&locked, fs::Permissions::from_mode(mode));
    set_mode(0o555).unwrap();

    // Root ignores directory permissions, so no failure can be provoked.
    if fs::write(locked.join("writable"), "").is_ok() {
        set_mode(0o755).unwrap();
        return;
    }

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("failed "))
        .stdout(predicate::str::contains("0 file(s) deleted, 1 failure(s)"));

    wildsweep()
        .arg(dir.path())
        .args(["-i", "[.js]", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[error]"));

    set_mode(0o755).unwrap();
    assert!(exists(&dir, "locked/a.js"));
}
