use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run remoteconf with given args.
fn remoteconf() -> Command {
    cargo_bin_cmd!("remoteconf")
}

#[test]
fn scan_lists_environments_and_services() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml")
        .write_str(
            "common:\n  base:\n    a: 1\nenvironments:\n  dev:\n    extends: base\n  prod:\n    extends: base\nservice_ports:\n  app: 8080\n  worker: 9090\n",
        )
        .unwrap();

    remoteconf()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("prod"))
        .stdout(predicate::str::contains("app"))
        .stdout(predicate::str::contains("worker"));
}

#[test]
fn scan_unions_across_files() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml")
        .write_str("environments:\n  dev:\n    a: 1\n")
        .unwrap();
    dir.child("remote-local.yml")
        .write_str("environments:\n  local:\n    b: 2\n")
        .unwrap();

    remoteconf()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("local"));
}

#[test]
fn scan_skips_broken_file_but_reports_it() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml")
        .write_str("environments:\n  dev:\n    a: 1\n")
        .unwrap();
    // Tab indentation is a parse error.
    dir.child("remote-local.yml")
        .write_str("environments:\n\tbroken: 1\n")
        .unwrap();

    remoteconf()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn scan_finds_nested_service_ports() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml")
        .write_str(
            "common:\n  base:\n    service_ports:\n      gateway: 7000\nenvironments:\n  dev:\n    extends: base\n",
        )
        .unwrap();

    remoteconf()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("gateway"));
}

#[test]
fn scan_with_no_files_warns_but_succeeds() {
    let dir = assert_fs::TempDir::new().unwrap();

    remoteconf()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration files found"));
}
